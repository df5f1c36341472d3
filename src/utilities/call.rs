use serde::{Deserialize, Serialize};

/// The three kinds of button an operator can press.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
    Inside = 2,
}

impl Call {
    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("hall up"),
            Call::HallDown => String::from("hall down"),
            Call::Inside => String::from("inside"),
        }
    }

    pub fn iter() -> impl Iterator<Item = Call> {
        [Call::HallUp, Call::HallDown, Call::Inside].iter().copied()
    }
}
