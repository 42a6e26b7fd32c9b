//! Button Layout
//!
//! Computes button bounds from label measurements. Anchors are fixed top-left
//! positions supplied by the caller; buttons are not auto-stacked.

use crate::geometry::{hit_test, Bounds};
use crate::input::MenuAction;
use sdl2::rect::Point;
use serde::{Deserialize, Serialize};

/// Padding added to each axis of the measured label size
pub const BUTTON_PADDING: u32 = 20;

/// How button sizes are derived from label measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Every button takes the padded size of the first label.
    ///
    /// Later labels may be wider than their button ("High Scores" vs
    /// "Play Game"); this is how the menu has always been laid out.
    #[default]
    FirstLabel,
    /// Every button takes the padded size of the widest and tallest label
    LongestLabel,
    /// Each button is sized from its own label
    PerButton,
}

/// A laid-out button, stored by the host and passed back each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub bounds: Bounds,
    pub label: String,
    pub action: MenuAction,
}

/// Declarative input to the layout: what to show, what it does, where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTemplate {
    pub label: String,
    pub action: MenuAction,
    pub anchor: (i32, i32),
}

impl ButtonTemplate {
    pub fn new(label: &str, action: MenuAction, anchor: (i32, i32)) -> Self {
        ButtonTemplate {
            label: label.to_string(),
            action,
            anchor,
        }
    }
}

/// The standard Play / High Scores / Quit column
pub fn main_menu_templates(anchors: &[(i32, i32); 3]) -> Vec<ButtonTemplate> {
    vec![
        ButtonTemplate::new("Play Game", MenuAction::StartGame, anchors[0]),
        ButtonTemplate::new("High Scores", MenuAction::ShowHighScores, anchors[1]),
        ButtonTemplate::new("Quit", MenuAction::Quit, anchors[2]),
    ]
}

/// Lays out buttons using a caller-supplied text measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    pub padding: u32,
    pub sizing: SizingMode,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        ButtonLayout {
            padding: BUTTON_PADDING,
            sizing: SizingMode::default(),
        }
    }
}

impl ButtonLayout {
    pub fn new(padding: u32, sizing: SizingMode) -> Self {
        ButtonLayout { padding, sizing }
    }

    /// Computes bounds for every template, in template order.
    ///
    /// `measure` returns a label's (width, height) in layout units. It is
    /// called once per label regardless of sizing mode.
    pub fn compute<F>(&self, templates: &[ButtonTemplate], measure: F) -> Vec<ButtonSpec>
    where
        F: Fn(&str) -> (u32, u32),
    {
        let sizes: Vec<(u32, u32)> = templates.iter().map(|t| measure(&t.label)).collect();

        let shared = match self.sizing {
            SizingMode::FirstLabel => sizes.first().copied(),
            SizingMode::LongestLabel => sizes
                .iter()
                .copied()
                .reduce(|(w1, h1), (w2, h2)| (w1.max(w2), h1.max(h2))),
            SizingMode::PerButton => None,
        };

        templates
            .iter()
            .zip(&sizes)
            .map(|(template, &own)| {
                let (width, height) = shared.unwrap_or(own);
                ButtonSpec {
                    bounds: Bounds::new(
                        template.anchor.0,
                        template.anchor.1,
                        padded(width, self.padding),
                        padded(height, self.padding),
                    ),
                    label: template.label.clone(),
                    action: template.action,
                }
            })
            .collect()
    }
}

/// Adds padding to a measured length, saturating at `i32::MAX`
fn padded(length: u32, padding: u32) -> i32 {
    i32::try_from(length.saturating_add(padding)).unwrap_or(i32::MAX)
}

/// First button, in declaration order, whose bounds contain `point`
pub fn button_at(buttons: &[ButtonSpec], point: Point) -> Option<&ButtonSpec> {
    buttons.iter().find(|button| hit_test(point, &button.bounds))
}
