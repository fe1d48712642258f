use motif_derive::entity;

#[entity(title = "Boat Details:")]
pub struct Boat {
    name: String,
    #[describe(label = "Length (m)")]
    length_m: u32,
    hull_colour: String,
    home_port: Port,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Port(String);

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[entity]
#[derive(Clone, std::fmt::Debug)]
struct Plain {
    id: u8,
}

fn main() {
    let boat = Boat::builder()
        .name("Nautilus")
        .length_m(70)
        .hull_colour("Grey")
        .home_port(Port("Vulcania".to_owned()))
        .build();

    assert_eq!(boat.name(), "Nautilus");
    assert_eq!(boat.length_m(), 70);
    assert_eq!(boat.home_port(), &Port("Vulcania".to_owned()));
    assert_eq!(
        boat.describe(),
        "Boat Details:\nName: Nautilus\nLength (m): 70\nHull Colour: Grey\nHome Port: Vulcania"
    );

    let mut plain = Plain::default();
    plain.set_id(7);
    assert_eq!(plain.id(), 7);
    assert_eq!(plain.describe(), "Id: 7");
    assert_eq!(Plain::builder().id(3).build(), Plain { id: 3 });
    assert_eq!(format!("{:?}", plain.clone()), "Plain { id: 7 }");
}
