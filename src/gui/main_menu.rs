//! Main Menu Screen
//!
//! Title plus a column of rounded buttons (Play Game, High Scores, Quit) over a
//! stretched background. The screen is a plain state struct: the host loop calls
//! [`MainMenuScreen::update`] with fresh pointer state and
//! [`MainMenuScreen::draw`] with its rendering context once per frame.

use crate::config::{rgba, MenuConfig};
use crate::error::MenuError;
use crate::geometry::Bounds;
use crate::input::{MenuAction, PointerState, PointerTracker};
use crate::layout::{button_at, main_menu_templates, ButtonLayout, ButtonSpec};
use crate::renderer::MenuRenderer;
use crate::rounded_rect::rasterize;
use sdl2::pixels::Color;

/// Colors and geometry for the main menu
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenuStyle {
    /// Fills the window before the background is drawn
    pub clear_color: Color,

    pub title_color: Color,

    /// Top edge of the title, in pixels from the top of the window
    pub title_y: i32,

    /// Rounded-corner radius of every button
    pub corner_radius: i32,

    pub button_color: Color,

    pub label_color: Color,
}

impl Default for MainMenuStyle {
    fn default() -> Self {
        MainMenuStyle::from_config(&MenuConfig::default())
    }
}

impl MainMenuStyle {
    pub fn from_config(config: &MenuConfig) -> Self {
        MainMenuStyle {
            clear_color: rgba(config.clear_color),
            title_color: rgba(config.title_color),
            title_y: config.title_y,
            corner_radius: config.corner_radius,
            button_color: rgba(config.button_color),
            label_color: rgba(config.label_color),
        }
    }
}

/// State of the main menu
///
/// # Example
///
/// ```rust
/// let mut menu = MainMenuScreen::new(&config, |text| renderer.measure_text(text));
///
/// // each frame
/// match menu.update(input.pointer) {
///     Some(MenuAction::Quit) => break 'running,
///     Some(action) => navigate(action),
///     None => {}
/// }
/// menu.draw(&mut renderer)?;
/// ```
pub struct MainMenuScreen {
    title: String,
    buttons: Vec<ButtonSpec>,
    style: MainMenuStyle,
    pointer: PointerTracker,
}

impl MainMenuScreen {
    /// Lays out the three standard buttons using `measure` for label sizes
    pub fn new<F>(config: &MenuConfig, measure: F) -> Self
    where
        F: Fn(&str) -> (u32, u32),
    {
        let layout = ButtonLayout::new(config.button_padding, config.sizing);
        let buttons = layout.compute(&main_menu_templates(&config.button_anchors), measure);

        for button in &buttons {
            tracing::debug!(label = %button.label, bounds = ?button.bounds, "laid out button");
        }

        MainMenuScreen::with_buttons(config.title.clone(), buttons, MainMenuStyle::from_config(config))
    }

    /// Builds the screen from already laid-out buttons
    pub fn with_buttons(title: String, buttons: Vec<ButtonSpec>, style: MainMenuStyle) -> Self {
        MainMenuScreen {
            title,
            buttons,
            style,
            pointer: PointerTracker::new(),
        }
    }

    #[cfg(test)]
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// Processes one frame of pointer input.
    ///
    /// Returns the action of the button under the pointer on the frame the
    /// primary button goes down. Holding the button does not repeat the action.
    pub fn update(&mut self, pointer: PointerState) -> Option<MenuAction> {
        let click = self.pointer.advance(pointer)?;
        let action = button_at(&self.buttons, click).map(|button| button.action);

        if let Some(action) = action {
            tracing::info!(?action, x = click.x(), y = click.y(), "menu button clicked");
        }
        action
    }

    /// Draws the whole screen: clear, background, title, buttons
    pub fn draw<R: MenuRenderer>(&self, renderer: &mut R) -> Result<(), MenuError> {
        renderer.clear(self.style.clear_color);

        let (viewport_width, viewport_height) = renderer.viewport_size();
        renderer.draw_background(Bounds::new(
            0,
            0,
            viewport_width as i32,
            viewport_height as i32,
        ))?;

        // Title, horizontally centered
        let (title_width, _) = renderer.measure_text(&self.title);
        let title_x = (viewport_width as i32 - title_width as i32) / 2;
        renderer.draw_text(&self.title, title_x, self.style.title_y, self.style.title_color)?;

        for button in &self.buttons {
            self.draw_button(renderer, button)?;
        }

        Ok(())
    }

    fn draw_button<R: MenuRenderer>(&self, renderer: &mut R, button: &ButtonSpec) -> Result<(), MenuError> {
        // Fill color is baked into the sprites, so blits are not tinted
        for blit in rasterize(button.bounds, self.style.corner_radius, self.style.button_color) {
            renderer.blit(blit.sprite, blit.dest, Color::WHITE)?;
        }

        let (text_width, text_height) = renderer.measure_text(&button.label);
        let bounds = &button.bounds;
        let text_x = bounds.x + (bounds.width - text_width as i32) / 2;
        let text_y = bounds.y + (bounds.height - text_height as i32) / 2;
        renderer.draw_text(&button.label, text_x, text_y, self.style.label_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite_cache::SpriteKey;
    use crate::text::measure_text;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Clear(Color),
        Background(Bounds),
        Blit(SpriteKey, Bounds),
        Text(String, i32, i32, Color),
    }

    /// Records draw calls instead of touching a graphics device
    struct RecordingRenderer {
        viewport: (u32, u32),
        ops: Vec<DrawOp>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            RecordingRenderer {
                viewport: (800, 480),
                ops: Vec::new(),
            }
        }

        fn blits(&self) -> Vec<(SpriteKey, Bounds)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Blit(key, dest) => Some((*key, *dest)),
                    _ => None,
                })
                .collect()
        }

        fn text(&self, label: &str) -> Option<(i32, i32, Color)> {
            self.ops.iter().find_map(|op| match op {
                DrawOp::Text(text, x, y, color) if text == label => Some((*x, *y, *color)),
                _ => None,
            })
        }
    }

    impl MenuRenderer for RecordingRenderer {
        fn measure_text(&self, text: &str) -> (u32, u32) {
            measure_text(text, 3)
        }

        fn viewport_size(&self) -> (u32, u32) {
            self.viewport
        }

        fn clear(&mut self, color: Color) {
            self.ops.push(DrawOp::Clear(color));
        }

        fn draw_background(&mut self, dest: Bounds) -> Result<(), MenuError> {
            self.ops.push(DrawOp::Background(dest));
            Ok(())
        }

        fn blit(&mut self, sprite: SpriteKey, dest: Bounds, _tint: Color) -> Result<(), MenuError> {
            self.ops.push(DrawOp::Blit(sprite, dest));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), MenuError> {
            self.ops.push(DrawOp::Text(text.to_string(), x, y, color));
            Ok(())
        }
    }

    fn play_only_menu() -> MainMenuScreen {
        let buttons = vec![ButtonSpec {
            bounds: Bounds::new(300, 200, 140, 50),
            label: "Play Game".to_string(),
            action: MenuAction::StartGame,
        }];
        MainMenuScreen::with_buttons("Main Menu".to_string(), buttons, MainMenuStyle::default())
    }

    #[test]
    fn test_click_on_play_fires_once() {
        let mut menu = play_only_menu();

        assert_eq!(menu.update(PointerState::new(305, 205, false)), None);
        assert_eq!(menu.update(PointerState::new(305, 205, true)), Some(MenuAction::StartGame));
        // held for several frames
        assert_eq!(menu.update(PointerState::new(305, 205, true)), None);
        assert_eq!(menu.update(PointerState::new(310, 210, true)), None);
    }

    #[test]
    fn test_press_on_first_frame_fires() {
        // previous state starts released, so a press already down on frame one counts
        let mut menu = play_only_menu();
        assert_eq!(menu.update(PointerState::new(305, 205, true)), Some(MenuAction::StartGame));
    }

    #[test]
    fn test_click_outside_buttons_does_nothing() {
        let mut menu = play_only_menu();
        assert_eq!(menu.update(PointerState::new(440, 200, true)), None);
        assert_eq!(menu.update(PointerState::new(-5, -5, false)), None);
        assert_eq!(menu.update(PointerState::new(-5, -5, true)), None);
    }

    #[test]
    fn test_drag_onto_button_does_not_click() {
        let mut menu = play_only_menu();
        assert_eq!(menu.update(PointerState::new(10, 10, true)), None);
        assert_eq!(menu.update(PointerState::new(305, 205, true)), None);
    }

    #[test]
    fn test_standard_layout_from_config() {
        let config = MenuConfig::default();
        let mut menu = MainMenuScreen::new(&config, |text| measure_text(text, 3));

        // "Play Game" at scale 3 is 162x21, plus 20 padding
        let sizes: Vec<(i32, i32)> = menu
            .buttons()
            .iter()
            .map(|b| (b.bounds.width, b.bounds.height))
            .collect();
        assert_eq!(sizes, vec![(182, 41); 3]);

        assert_eq!(menu.update(PointerState::new(310, 410, true)), Some(MenuAction::Quit));
        menu.update(PointerState::new(310, 410, false));
        assert_eq!(menu.update(PointerState::new(310, 310, true)), Some(MenuAction::ShowHighScores));
    }

    #[test]
    fn test_draw_order_and_title_position() {
        let menu = play_only_menu();
        let mut renderer = RecordingRenderer::new();
        menu.draw(&mut renderer).unwrap();

        assert_eq!(renderer.ops[0], DrawOp::Clear(Color::RGB(100, 149, 237)));
        assert_eq!(renderer.ops[1], DrawOp::Background(Bounds::new(0, 0, 800, 480)));

        // "Main Menu" is 162 wide at scale 3: (800 - 162) / 2 = 319
        assert_eq!(renderer.text("Main Menu"), Some((319, 50, Color::RGB(255, 215, 0))));
    }

    #[test]
    fn test_button_drawn_as_nine_blits_with_centered_label() {
        let menu = play_only_menu();
        let mut renderer = RecordingRenderer::new();
        menu.draw(&mut renderer).unwrap();

        let blits = renderer.blits();
        assert_eq!(blits.len(), 9);
        let (center_key, center_dest) = blits[8];
        assert_eq!(center_dest, Bounds::new(320, 220, 100, 10));
        assert_eq!(
            center_key,
            SpriteKey::Solid {
                width: 100,
                height: 10,
                color: Color::RGB(255, 69, 0)
            }
        );

        // label 162x21 inside 140x50: x = 300 + (140 - 162) / 2 = 289
        assert_eq!(renderer.text("Play Game"), Some((289, 214, Color::WHITE)));
    }

    #[test]
    fn test_draw_is_repeatable() {
        let menu = play_only_menu();
        let mut first = RecordingRenderer::new();
        let mut second = RecordingRenderer::new();
        menu.draw(&mut first).unwrap();
        menu.draw(&mut second).unwrap();
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_menu_without_buttons_ignores_clicks() {
        let mut menu =
            MainMenuScreen::with_buttons("Main Menu".to_string(), Vec::new(), MainMenuStyle::default());
        assert!(menu.buttons().is_empty());
        assert_eq!(menu.update(PointerState::new(305, 205, true)), None);
    }

    #[test]
    fn test_huge_text_scale_lays_out_without_overflow() {
        let config = MenuConfig {
            text_scale: 100_000_000,
            ..Default::default()
        };
        let menu = MainMenuScreen::new(&config, |text| measure_text(text, config.text_scale));
        assert!(menu.buttons().iter().all(|b| b.bounds.width == i32::MAX));
    }
}
