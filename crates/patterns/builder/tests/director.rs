use foundry_builder::{Builder, BuilderError, ConcreteBuilder, Director, Part, Product};
use std::sync::{Arc, Mutex};

/// Records the calls a director makes, to check sequencing independently of the parts.
#[derive(Debug, Default)]
struct RecordingBuilder {
    calls: Arc<Mutex<Vec<&'static str>>>,
    inner: ConcreteBuilder,
}

impl RecordingBuilder {
    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl Builder for RecordingBuilder {
    fn reset(&mut self) {
        self.record("reset");
        self.inner.reset();
    }

    fn build_part_one(&mut self) {
        self.record("one");
        self.inner.build_part_one();
    }

    fn build_part_two(&mut self) {
        self.record("two");
        self.inner.build_part_two();
    }

    fn build_part_three(&mut self) {
        self.record("three");
        self.inner.build_part_three();
    }

    fn get_product(&mut self) -> Result<Product, BuilderError> {
        self.record("get");
        self.inner.get_product()
    }
}

#[test]
fn director_product_is_available_right_after_construction() {
    let mut director = Director::new(Box::new(ConcreteBuilder::new()));

    let product = director.get_product().expect("director sequences the steps");

    assert!(product.is_complete());
    assert_eq!(product.parts(), [Part::PartOne, Part::PartTwo, Part::PartThree]);
}

#[test]
fn director_resets_then_calls_steps_in_order_then_takes_the_product() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let builder = RecordingBuilder { calls: Arc::clone(&calls), ..RecordingBuilder::default() };
    let mut director = Director::new(Box::new(builder));

    director.get_product().expect("recording builder delegates");

    assert_eq!(*calls.lock().expect("calls lock"), ["reset", "one", "two", "three", "get"]);
}

#[test]
fn director_discards_parts_of_a_prefilled_builder() {
    let mut builder = ConcreteBuilder::new();
    builder.part_one().part_three();
    let mut director = Director::new(Box::new(builder));

    let product = director.get_product().expect("director sequences the steps");

    assert!(product.is_complete());
    assert_eq!(product.to_string(), "Product { parts: [part-one, part-two, part-three] }");
}

#[test]
fn each_director_call_yields_a_fresh_product() {
    let mut director = Director::new(Box::new(ConcreteBuilder::new()));

    let first = director.get_product().expect("first product");
    let second = director.get_product().expect("second product");

    assert_eq!(first, second);
    assert_eq!(second.parts().len(), 3, "parts from the first build must not leak");
}

#[test]
fn returned_builder_is_empty_after_a_build() {
    let mut director = Director::new(Box::new(ConcreteBuilder::new()));
    director.get_product().expect("product");

    let mut builder = director.into_builder();
    let err = builder.get_product().expect_err("nothing left to take");

    assert!(matches!(err, BuilderError::InvalidState { .. }));
}

#[test]
fn bare_builder_refuses_an_empty_product() {
    let mut builder = ConcreteBuilder::new();

    let err = builder.get_product().expect_err("no step ran");

    assert_eq!(err.to_string(), "Invalid builder state: no build step has run");
}

#[test]
fn builder_can_be_driven_by_hand() {
    let mut builder = ConcreteBuilder::new();
    builder.part_one().part_two().part_three();

    let product = builder.get_product().expect("all steps ran");

    assert!(product.is_complete());
    assert_eq!(product.to_string(), "Product { parts: [part-one, part-two, part-three] }");
}

#[test]
fn builder_steps_are_recorded_in_call_order() {
    let mut builder = ConcreteBuilder::new();
    builder.part_three().part_one();

    let product = builder.get_product().expect("two steps ran");

    assert_eq!(product.parts(), [Part::PartThree, Part::PartOne]);
    assert!(!product.is_complete());
}
