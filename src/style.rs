use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{HoverConfig, RevealedSlotConfig};
use crate::layout::{place, Card};
use crate::state::GameState;

pub const REVEALED_BOX_SHADOW: &str = "-0.3px -0.3px 0.5px #312f2c40, \
     -1.1px -1px 1.7px -0.8px #312f2c40, \
     -2.7px -2.6px 4.2px -1.7px #312f2c40, \
     -6.6px -6.3px 10.3px -2.5px #312f2c40";

/// Translation in pixels, rotation in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.x, self.y, self.rotation, self.scale
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub brightness: f64,
    pub saturate: f64,
}

impl Filter {
    /// Undoes the dimming the stylesheet applies to cards that are not up next.
    pub const RESET: Filter = Filter {
        brightness: 1.0,
        saturate: 1.0,
    };
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brightness({}) saturate({})", self.brightness, self.saturate)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Pointer,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Pointer => f.write_str("pointer"),
        }
    }
}

/// A `transform` transition with `ease` timing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub secs: f64,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}s ease", self.secs)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardStyle {
    pub transform: Transform,
    pub filter: Option<Filter>,
    pub cursor: Option<Cursor>,
    pub transition: Option<Transition>,
    pub box_shadow: Option<String>,
}

/// `CardStyle` rendered to CSS property values, keyed the way the DOM style object expects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CssStyle {
    pub transform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl CardStyle {
    pub fn to_css(&self) -> CssStyle {
        CssStyle {
            transform: self.transform.to_string(),
            filter: self.filter.map(|f| f.to_string()),
            cursor: self.cursor.map(|c| c.to_string()),
            transition: self.transition.map(|t| t.to_string()),
            box_shadow: self.box_shadow.clone(),
        }
    }
}

pub fn transform_styles(x: f64, y: f64, rotation: f64, scale: f64) -> CardStyle {
    CardStyle {
        transform: Transform {
            x,
            y,
            rotation,
            scale,
        },
        filter: None,
        cursor: None,
        transition: None,
        box_shadow: None,
    }
}

/// Style of the face-up card in its slot off the ring.
pub fn revealed_card_style(slot: &RevealedSlotConfig) -> CardStyle {
    CardStyle {
        filter: Some(Filter {
            brightness: slot.brightness,
            saturate: slot.saturate,
        }),
        transition: Some(Transition {
            secs: slot.transition_secs,
        }),
        box_shadow: Some(REVEALED_BOX_SHADOW.to_string()),
        ..transform_styles(slot.x, slot.y, slot.rotation, slot.scale)
    }
}

impl GameState {
    /// Ring position of `card`, highlighted when it is the card expected next.
    pub fn card_style(&self, card: &Card) -> CardStyle {
        let style = transform_styles(card.x, card.y, card.rotation, 1.0);
        if card.id == self.current_card() {
            CardStyle {
                filter: Some(Filter::RESET),
                ..style
            }
        } else {
            style
        }
    }

    /// Like `card_style`, but while `hovered` the card is pushed out to the hover radius.
    pub fn first_card_style(
        &self,
        card: &Card,
        hovered: bool,
        card_count: usize,
        hover: &HoverConfig,
    ) -> CardStyle {
        if !hovered {
            return self.card_style(card);
        }
        let index = card.id.saturating_sub(1) as usize;
        let p = place(index, card_count, hover.radius);
        CardStyle {
            filter: Some(Filter {
                brightness: hover.brightness,
                saturate: hover.saturate,
            }),
            cursor: Some(Cursor::Pointer),
            ..transform_styles(p.x, p.y, p.rotation, hover.scale)
        }
    }
}
