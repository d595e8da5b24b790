use foundry_factory_method::FactoryMethodShowcase;
use foundry_kernel::domain::config::ShowcaseConfig;
use foundry_kernel::{Showcase, ShowcaseError};

fn run(config: &ShowcaseConfig) -> Result<String, ShowcaseError> {
    let mut out = Vec::new();
    FactoryMethodShowcase.run(config, &mut out)?;
    Ok(String::from_utf8(out).expect("showcase writes utf8"))
}

#[test]
fn default_output_is_deterministic() {
    let text = run(&ShowcaseConfig::default()).expect("default config runs");

    assert_eq!(
        text,
        "lip-oil creator: I'm a lip oil\n\
         face-serum creator: I'm a face serum\n\
         default creator: I'm a face serum\n\
         tagged creator [lip]: I'm a lip oil\n"
    );
    assert_eq!(text, run(&ShowcaseConfig::default()).expect("second run"));
}

#[test]
fn serum_tag_switches_the_tagged_line() {
    let mut config = ShowcaseConfig::default();
    config.factory_method.tag = "serum".to_owned();

    let text = run(&config).expect("known tag runs");
    assert!(text.ends_with("tagged creator [serum]: I'm a face serum\n"));
}

#[test]
fn strict_mode_surfaces_the_pattern_error() {
    let mut config = ShowcaseConfig::default();
    config.factory_method.tag = "toner".to_owned();
    config.factory_method.strict = true;

    let err = run(&config).expect_err("strict mode rejects toner");

    assert_eq!(err.kind(), "Pattern");
    assert_eq!(err.to_string(), "Pattern error (factory-method): Unknown discriminator 'toner'");
}
