use motif_factory::{CarKind, Drivable, FactoryError, Registry, car_registry};
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn action_of(registry: &Registry<dyn Drivable>, name: &str) -> String {
    registry.create(name).expect("registered car").action().into_owned()
}

#[test]
fn built_in_cars_drive_as_expected() {
    let registry = car_registry();

    assert_eq!(action_of(&registry, "RaceCar"), "Driving a race car!");
    assert_eq!(action_of(&registry, "OffRoadCar"), "Driving an off-road car!");
    assert_eq!(action_of(&registry, "TownCar"), "Driving a town car!");
}

#[test]
fn created_cars_are_distinct_variants() {
    let registry = car_registry();

    let kinds: Vec<&str> = ["RaceCar", "OffRoadCar", "TownCar"]
        .into_iter()
        .map(|name| registry.create(name).unwrap().kind())
        .collect();

    assert_eq!(kinds, ["RaceCar", "OffRoadCar", "TownCar"]);
}

#[test]
fn unknown_discriminator_is_not_found() {
    let registry = car_registry();

    let err = registry.create("Unknown").unwrap_err();
    assert_eq!(
        err,
        FactoryError::NotFound { discriminator: "Unknown".to_owned(), context: None }
    );
    assert!(registry.create("racecar").unwrap_err().is_not_found());
    assert!(registry.create("").unwrap_err().is_not_found());
}

#[test]
fn registry_lists_every_kind() {
    let registry = car_registry();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.discriminators(), ["OffRoadCar", "RaceCar", "TownCar"]);
}

#[derive(Debug)]
struct Hovercraft;

impl Drivable for Hovercraft {
    fn kind(&self) -> &'static str {
        "Hovercraft"
    }

    fn action(&self) -> Cow<'static, str> {
        Cow::Borrowed("Driving a hovercraft!")
    }
}

#[test]
fn third_party_variant_can_be_registered() {
    let mut registry = car_registry();
    registry.register("Hovercraft", || -> Box<dyn Drivable> { Box::new(Hovercraft) }).unwrap();

    let mut out = Vec::new();
    registry.create("Hovercraft").unwrap().drive(&mut out).unwrap();
    assert_eq!(out, b"Driving a hovercraft!\n");
}

#[test]
fn built_in_name_cannot_be_hijacked() {
    let mut registry = car_registry();

    let err = registry
        .register("RaceCar", || -> Box<dyn Drivable> { Box::new(Hovercraft) })
        .unwrap_err();

    assert!(matches!(err, FactoryError::DuplicateDiscriminator { .. }));
    assert_eq!(action_of(&registry, "RaceCar"), "Driving a race car!");
}

#[test]
fn every_create_runs_the_rule_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut registry: Registry<dyn Drivable> = Registry::new();
    registry
        .register("TownCar", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            CarKind::TownCar.create()
        })
        .unwrap();

    let first = registry.create("TownCar").unwrap();
    let second = registry.create("TownCar").unwrap();
    let _ = registry.create("Nope");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(first.kind(), second.kind());
}

#[test]
fn construction_failure_is_distinct_from_not_found() {
    let mut registry: Registry<dyn Drivable> = Registry::new();
    registry
        .register_fallible("Prototype", || Err(FactoryError::construction("no parts left")))
        .unwrap();

    let err = registry.create("Prototype").unwrap_err();
    assert!(matches!(err, FactoryError::Construction { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn populated_registry_is_shareable_across_threads() {
    let registry = Arc::new(car_registry());

    let handles: Vec<_> = ["RaceCar", "OffRoadCar", "TownCar"]
        .into_iter()
        .map(|name| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.create(name).map(|car| car.kind()))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
