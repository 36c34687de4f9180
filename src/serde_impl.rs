//! serde support: a KeyPress is stored as its description text, so key
//! bindings read naturally in config files.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::keys::{DescriptionStyle, KeyPress};

impl Serialize for KeyPress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Mac style is the one that spells out every modifier
        serializer.serialize_str(&self.text_description_with(DescriptionStyle::Mac))
    }
}

impl<'de> Deserialize<'de> for KeyPress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(KeyPress::create_from_description(&text))
    }
}
