use foundry_builder::BuilderShowcase;
use foundry_kernel::Showcase;
use foundry_kernel::domain::config::ShowcaseConfig;

#[test]
fn showcase_prints_the_finished_product() {
    let mut out = Vec::new();

    BuilderShowcase.run(&ShowcaseConfig::default(), &mut out).expect("builder showcase runs");

    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "Product { parts: [part-one, part-two, part-three] }\n"
    );
}
