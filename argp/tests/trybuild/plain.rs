use argp::{Cmd, Options};

/// Every supported field kind, tagged and untagged.
#[derive(Debug, Default, Options)]
struct Everything {
    #[argp("i,native int")]
    int: isize,
    #[argp("int64")]
    int64: i64,
    uint: usize,
    #[argp("uint64,wide unsigned")]
    uint64: u64,
    #[argp("f,a `ratio`")]
    float: f64,
    #[argp("b")]
    flag: bool,
    name: String,
}

#[derive(Default, Options)]
struct Generic<T: Default + 'static> {
    #[argp("depth")]
    depth: u64,
    extra: T,
}

fn main() {
    let cmd = Cmd::new("all", "every kind", Everything::default(), |_: &mut Everything| {
        Ok::<_, argp::ArgpError>(())
    });
    let _: &Everything = cmd.options();
    let _: Result<Vec<argp::FlagSpec>, argp::ArgpError> = Generic::<String>::default().flags();
}
