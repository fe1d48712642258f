use motif_derive::entity;

/// A car assembled through [`CarBuilder`].
#[entity(title = "Car Details:")]
pub struct Car {
    make: String,
    model: String,
    year: i32,
    color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_render_defaults() {
        let car = Car::builder().make("Lada").build();
        assert_eq!(car.describe(), "Car Details:\nMake: Lada\nModel: \nYear: 0\nColor: ");
    }

    #[test]
    fn setters_on_the_entity_overwrite() {
        let mut car = Car::default();
        car.set_year(1999);
        car.set_year(2001);
        car.set_model(String::from("Corolla"));

        assert_eq!(car.year(), 2001);
        assert_eq!(car.model(), "Corolla");
    }

    #[test]
    fn last_write_wins_in_a_chain() {
        let car = Car::builder().color("Red").make("Fiat").color("Green").build();
        assert_eq!(car.color(), "Green");
        assert_eq!(car.make(), "Fiat");
    }

    #[test]
    fn display_matches_describe() {
        let car = Car::builder().make("BMW").model("X6").year(2024).color("Black").build();
        assert_eq!(car.to_string(), car.describe());
    }
}
