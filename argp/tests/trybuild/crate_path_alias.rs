use argp as flags;
use flags::Options;

/// Verifies that `#[argp(crate = "flags")]` routes the generated impl
/// through a renamed import of the runtime crate.
#[derive(Default, Options)]
#[argp(crate = "flags")]
struct Aliased {
    #[argp("n,count")]
    n: u64,
}

fn main() {
    let mut value = Aliased::default();
    let _: Result<(), flags::ArgpError> = value.assign(0, flags::FlagValue::Uint64(3));
}
