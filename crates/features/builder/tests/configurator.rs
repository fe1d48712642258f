use motif_builder::{Car, CarBuilder, Person};

#[test]
fn toyota_camry_end_to_end() {
    let car = Car::builder().make("Toyota").model("Camry").year(2023).color("Blue").build();

    assert_eq!(
        car.describe(),
        "Car Details:\nMake: Toyota\nModel: Camry\nYear: 2023\nColor: Blue"
    );
}

#[test]
fn fresh_builder_yields_default_entity() {
    assert_eq!(CarBuilder::new().build(), Car::default());
    assert_eq!(
        Car::default().describe(),
        "Car Details:\nMake: \nModel: \nYear: 0\nColor: "
    );
}

#[test]
fn chained_and_sequential_configuration_agree() {
    let chained = Car::builder().make("BMW").model("X6").year(2024).color("Black").build();

    let mut builder = Car::builder();
    builder = builder.make("BMW");
    builder = builder.model("X6");
    builder = builder.year(2024);
    builder = builder.color("Black");
    let sequential = builder.build();

    assert_eq!(chained, sequential);
}

#[test]
fn describe_is_idempotent() {
    let car = Car::builder().make("Skoda").year(2010).build();
    assert_eq!(car.describe(), car.describe());
}

#[test]
fn reopened_entity_keeps_previous_fields() {
    let original = Car::builder().make("Volvo").model("240").build();
    let updated = CarBuilder::from(original.clone()).year(1988).build();

    assert_eq!(updated.make(), "Volvo");
    assert_eq!(updated.model(), "240");
    assert_eq!(updated.year(), 1988);
    assert_eq!(original.year(), 0);
}

#[test]
fn person_renders_without_title() {
    let person = Person::builder().name("Ahmad").age(25).address("123 Main St, Anytown").build();

    assert_eq!(person.describe(), "Name: Ahmad\nAge: 25\nAddress: 123 Main St, Anytown");
}

#[test]
fn person_mutators_match_builder() {
    let mut person = Person::default();
    person.set_name("Ahmad");
    person.set_age(25);
    person.set_address("123 Main St, Anytown");

    assert_eq!(
        person,
        Person::builder().address("123 Main St, Anytown").age(25).name("Ahmad").build()
    );
}
