//! Binding flags onto derived options structs.

use anyhow::{Result, ensure};
use argp::{ArgpError, Options, ParseErrorPolicy, bind_and_parse};
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq, Options)]
struct AllKinds {
    #[argp("i,an int")]
    int: isize,
    #[argp("int64,an int64")]
    int64: i64,
    #[argp("u,a uint")]
    uint: usize,
    #[argp("uint64,a uint64")]
    uint64: u64,
    #[argp("f,a float64")]
    float: f64,
    #[argp("b,a bool")]
    flag: bool,
    #[argp("name,a string")]
    name: String,
}

impl Default for AllKinds {
    fn default() -> Self {
        Self {
            int: 1,
            int64: -2,
            uint: 3,
            uint64: 4,
            float: 0.5,
            flag: false,
            name: "pike".into(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Options)]
struct Untagged {
    depth: u64,
    r#type: String,
}

#[derive(Debug, Default, Options)]
struct WithUnsupported {
    #[argp("ok")]
    ok: bool,
    #[argp("port")]
    port: u16,
}

#[fixture]
fn opts() -> AllKinds {
    AllKinds::default()
}

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

fn bind<O: Options>(options: &mut O, line: &str) -> Result<Vec<String>, ArgpError> {
    bind_and_parse("test", options, &tokens(line), ParseErrorPolicy::ReturnError)
}

#[rstest]
#[case("")]
#[case("positional -i 9")]
#[case("--")]
fn defaults_survive_without_matching_flags(mut opts: AllKinds, #[case] line: &str) -> Result<()> {
    bind(&mut opts, line)?;
    ensure!(opts == AllKinds::default(), "fields changed: {opts:?}");
    Ok(())
}

#[rstest]
fn every_kind_is_bound(mut opts: AllKinds) -> Result<()> {
    let rest = bind(
        &mut opts,
        "-i -7 -int64 0x10 -u 22 -uint64 1_000 -f 2.5 -b -name ken tail",
    )?;
    let expected = AllKinds {
        int: -7,
        int64: 16,
        uint: 22,
        uint64: 1000,
        float: 2.5,
        flag: true,
        name: "ken".into(),
    };
    ensure!(opts == expected, "got {opts:?}");
    ensure!(rest == ["tail"], "remainder {rest:?}");
    Ok(())
}

#[rstest]
#[case("-name ada", AllKinds { name: "ada".into(), ..AllKinds::default() })]
#[case("--u=9", AllKinds { uint: 9, ..AllKinds::default() })]
#[case("-b=false", AllKinds::default())]
#[case("-b=T", AllKinds { flag: true, ..AllKinds::default() })]
#[case("-f -1e3", AllKinds { float: -1000.0, ..AllKinds::default() })]
fn single_flag_updates_only_its_field(
    mut opts: AllKinds,
    #[case] line: &str,
    #[case] expected: AllKinds,
) -> Result<()> {
    bind(&mut opts, line)?;
    ensure!(opts == expected, "got {opts:?}");
    Ok(())
}

#[rstest]
fn repeated_flag_keeps_last_value(mut opts: AllKinds) -> Result<()> {
    bind(&mut opts, "-i 1 -i 2 -i 3")?;
    ensure!(opts.int == 3, "got {}", opts.int);
    Ok(())
}

#[rstest]
fn binding_is_deterministic() -> Result<()> {
    let line = "-i 12 -name ken -b -f 0.25 rest";
    let mut first = AllKinds::default();
    let mut second = AllKinds::default();
    let first_rest = bind(&mut first, line)?;
    let second_rest = bind(&mut second, line)?;
    ensure!(first == second, "{first:?} != {second:?}");
    ensure!(first_rest == second_rest, "{first_rest:?} != {second_rest:?}");
    Ok(())
}

#[rstest]
fn untagged_fields_use_their_identifier() -> Result<()> {
    let mut opts = Untagged::default();
    bind(&mut opts, "-depth 3 -type blob")?;
    ensure!(
        opts == Untagged {
            depth: 3,
            r#type: "blob".into(),
        },
        "got {opts:?}"
    );
    Ok(())
}

#[rstest]
fn unsupported_field_fails_before_parsing() -> Result<()> {
    let mut opts = WithUnsupported::default();
    let err = bind(&mut opts, "-ok");
    ensure!(
        matches!(
            &err,
            Err(ArgpError::UnsupportedType { field, type_name })
                if field == "port" && type_name.ends_with("u16")
        ),
        "unexpected result: {err:?}"
    );
    ensure!(!opts.ok, "no field may change after a configuration error");
    Ok(())
}

#[rstest]
fn unsupported_field_message_names_the_type() {
    let err = WithUnsupported::default().flags().err();
    assert_eq!(
        err.map(|err| err.to_string()).as_deref(),
        Some("unexpected option type u16 for field 'port'")
    );
}

#[rstest]
fn flags_report_declaration_order(opts: AllKinds) -> Result<()> {
    let names: Vec<String> = opts
        .flags()?
        .iter()
        .map(|spec| spec.name().to_owned())
        .collect();
    ensure!(
        names == ["i", "int64", "u", "uint64", "f", "b", "name"],
        "got {names:?}"
    );
    Ok(())
}
