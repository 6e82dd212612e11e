//! TV-style focusable button.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use focustv_core::logging::targets;
use focustv_core::{Object, ObjectId, Signal};
use focustv_render::{BoxShadow, Color, Point, Rect, Size, Transform2D};

use crate::widget::animation::{Animation, AnimationScope, Animator, Easing};
use crate::widget::base::WidgetBase;
use crate::widget::events::{PressPhase, WidgetEvent};
use crate::widget::geometry::SizeHint;
use crate::widget::traits::Widget;

use super::gradient_view::GradientBackgroundView;

/// Shadow offset applied while a press is held down.
const PRESSED_SHADOW_OFFSET: Size = Size::new(0.0, 10.0);

/// Error loading a [`ButtonStyle`] from a serialized description.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The style document could not be parsed.
    #[error("invalid button style: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The two interaction appearances of a [`FocusableButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// The button does not have directional focus.
    #[default]
    Normal,
    /// The button has directional focus.
    Focused,
}

/// Style configuration for a [`FocusableButton`].
///
/// Every field has a default, so styles can be declared sparsely:
///
/// ```
/// use focustv::widget::widgets::ButtonStyle;
///
/// let style = ButtonStyle::from_json(r##"{
///     "normal_background_color": "#336699",
///     "focused_scale_factor": 1.1
/// }"##).unwrap();
/// assert_eq!(style.focused_scale_factor, 1.1);
/// ```
///
/// End colors are optional. When unset, the corresponding gradient collapses
/// to a single color; see [`FocusableButton::focused_background_end_color`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Gradient start color while focused.
    pub focused_background_color: Color,
    /// Gradient end color while focused. Falls back to
    /// `focused_background_color` when `None`.
    pub focused_background_end_color: Option<Color>,
    /// Gradient start color while not focused.
    pub normal_background_color: Color,
    /// Gradient end color while not focused. Falls back to
    /// `normal_background_color` when `None`.
    pub normal_background_end_color: Option<Color>,
    /// Corner rounding of the button and its gradient fill.
    pub corner_radius: f32,
    /// Uniform scale applied while focused.
    pub focused_scale_factor: f32,
    /// Drop shadow blur radius.
    pub focused_shadow_radius: f32,
    /// Drop shadow opacity.
    pub focused_shadow_opacity: f32,
    /// Drop shadow color.
    pub shadow_color: Color,
    /// Drop shadow offset while focused.
    pub shadow_offset_focused: Size,
    /// Duration of self-managed press transitions, in seconds.
    pub animation_duration: f32,
    /// Title color while focused.
    pub focused_title_color: Color,
    /// Title color while not focused.
    pub normal_title_color: Color,
    /// Gradient axis start, in normalized unit-square coordinates.
    pub gradient_start_point: Point,
    /// Gradient axis end, in normalized unit-square coordinates.
    pub gradient_end_point: Point,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            focused_background_color: Color::RED,
            focused_background_end_color: None,
            normal_background_color: Color::WHITE,
            normal_background_end_color: None,
            corner_radius: 5.0,
            focused_scale_factor: 1.2,
            focused_shadow_radius: 10.0,
            focused_shadow_opacity: 0.25,
            shadow_color: Color::BLACK,
            shadow_offset_focused: Size::new(0.0, 27.0),
            animation_duration: 0.2,
            focused_title_color: Color::WHITE,
            normal_title_color: Color::WHITE,
            gradient_start_point: Point::new(0.0, 0.0),
            gradient_end_point: Point::new(1.0, 1.0),
        }
    }
}

impl ButtonStyle {
    /// Load a style from a JSON document. Missing fields take their
    /// defaults; colors are hex strings like `"#FF0000"`.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A button that reacts to directional focus and physical presses with
/// animated transitions.
///
/// Gaining focus scales the button up, lifts it with a drop shadow, and
/// swaps its gradient background to the focused color pair; losing focus
/// reverses all three. A press while focused depresses the button back to
/// its unscaled size until released.
///
/// Focus transitions are scheduled into a host-supplied
/// [`AnimationScope`] so they run in lockstep with the host's own focus
/// animation. Press transitions run through the button's own [`Animator`]
/// with the style's `animation_duration`.
///
/// # Example
///
/// ```
/// use focustv::prelude::*;
///
/// let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));
/// button.set_title("Play");
/// button.set_normal_background_color(Color::from_rgb8(51, 102, 153));
///
/// let mut coordinator = CoordinatedAnimations::new();
/// button.focus_changed(true, &mut coordinator);
/// coordinator.run();
/// ```
pub struct FocusableButton {
    base: WidgetBase,
    style: ButtonStyle,
    title: String,
    gradient_view: GradientBackgroundView,
    animator: Animator,
    visual_state: VisualState,

    /// Emitted when the button gains or loses focus, with the new state.
    pub focus_state_changed: Signal<bool>,

    /// Emitted when a press begins on the button.
    pub pressed: Signal<()>,

    /// Emitted when a press on the button ends normally.
    pub released: Signal<()>,
}

impl Default for FocusableButton {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusableButton {
    /// Create a button with a zero-size frame and default style.
    pub fn new() -> Self {
        Self::with_frame(Rect::ZERO)
    }

    /// Create a button with the given frame and default style.
    pub fn with_frame(frame: Rect) -> Self {
        Self::from_style(frame, ButtonStyle::default())
    }

    /// Create a button with the given frame and style.
    ///
    /// This is also the entry point for buttons instantiated from a
    /// serialized layout description: deserialize the [`ButtonStyle`] first,
    /// then construct with it.
    pub fn from_style(frame: Rect, style: ButtonStyle) -> Self {
        let mut base = WidgetBase::new();
        base.set_geometry(frame);
        base.set_focusable(true);

        let mut button = Self {
            base,
            style,
            title: String::new(),
            gradient_view: GradientBackgroundView::new(),
            animator: Animator::new(),
            visual_state: VisualState::Normal,
            focus_state_changed: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        };
        button.set_up();
        button
    }

    /// Apply the current style to the button and its gradient child.
    ///
    /// Runs at construction and again from [`apply_style`](Self::apply_style),
    /// so a button re-styled after construction looks exactly like one built
    /// with that style.
    fn set_up(&mut self) {
        tracing::debug!(
            target: targets::WIDGET,
            id = self.base.object_id().as_raw(),
            "setting up focusable button"
        );

        let layer = self.base.layer();
        layer.set_corner_radius(self.style.corner_radius);
        layer.set_masks_to_bounds(true);
        layer.set_transform(Transform2D::IDENTITY);
        layer.set_shadow(BoxShadow::new(
            self.style.shadow_color,
            self.style.shadow_offset_focused,
            self.style.focused_shadow_radius,
            self.style.focused_shadow_opacity,
        ));

        let parent_id = self.base.object_id();
        self.gradient_view.widget_base_mut().set_parent(Some(parent_id));
        self.gradient_view.set_geometry(self.base.rect());
        self.gradient_view.set_corner_radius(self.style.corner_radius);
        self.gradient_view
            .set_gradient_points(self.style.gradient_start_point, self.style.gradient_end_point);
        self.sync_gradient_colors();

        self.base.update();
    }

    // =========================================================================
    // Title
    // =========================================================================

    /// The button's title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the button's title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            self.title = title;
            self.base.update();
        }
    }

    /// The title color for the current interaction state.
    ///
    /// Computed from the style on every call, so mutating the style's title
    /// colors takes effect for the matching state immediately.
    pub fn current_title_color(&self) -> Color {
        match self.visual_state {
            VisualState::Focused => self.style.focused_title_color,
            VisualState::Normal => self.style.normal_title_color,
        }
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The button's current style.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Replace the whole style and re-run setup.
    pub fn apply_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.set_up();
    }

    /// The button's current visual state.
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    /// The button's child gradient view.
    pub fn gradient_view(&self) -> &GradientBackgroundView {
        &self.gradient_view
    }

    /// The effective focused gradient end color.
    ///
    /// Falls back to `focused_background_color`, collapsing the focused
    /// gradient to a single color when no end color is configured.
    pub fn focused_background_end_color(&self) -> Color {
        self.style
            .focused_background_end_color
            .unwrap_or(self.style.focused_background_color)
    }

    /// The effective normal gradient end color.
    ///
    /// Falls back to `normal_background_color`.
    pub fn normal_background_end_color(&self) -> Color {
        self.style
            .normal_background_end_color
            .unwrap_or(self.style.normal_background_color)
    }

    /// The gradient color pair shown while focused.
    pub fn focused_gradient_colors(&self) -> [Color; 2] {
        [
            self.style.focused_background_color,
            self.focused_background_end_color(),
        ]
    }

    /// The gradient color pair shown while not focused.
    pub fn normal_gradient_colors(&self) -> [Color; 2] {
        [
            self.style.normal_background_color,
            self.normal_background_end_color(),
        ]
    }

    /// Set the focused gradient start color.
    pub fn set_focused_background_color(&mut self, color: Color) {
        self.style.focused_background_color = color;
        self.base.update();
    }

    /// Set the focused gradient end color, or `None` to collapse the
    /// focused gradient to a single color.
    pub fn set_focused_background_end_color(&mut self, color: Option<Color>) {
        self.style.focused_background_end_color = color;
        self.base.update();
    }

    /// Set the normal gradient start color.
    ///
    /// Re-applies the normal color pair to the child gradient view
    /// immediately, so the next transition back to Normal uses it.
    pub fn set_normal_background_color(&mut self, color: Color) {
        self.style.normal_background_color = color;
        self.sync_gradient_colors();
    }

    /// Set the normal gradient end color, or `None` to collapse the normal
    /// gradient to a single color. Re-applies the pair immediately.
    pub fn set_normal_background_end_color(&mut self, color: Option<Color>) {
        self.style.normal_background_end_color = color;
        self.sync_gradient_colors();
    }

    /// Set the corner radius used by the next setup pass.
    ///
    /// Applied to the layers by [`apply_style`](Self::apply_style) or
    /// reconstruction, not immediately.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = radius;
    }

    /// Set the uniform scale applied while focused.
    pub fn set_focused_scale_factor(&mut self, factor: f32) {
        self.style.focused_scale_factor = factor;
    }

    /// Set the drop shadow offset used while focused.
    pub fn set_shadow_offset_focused(&mut self, offset: Size) {
        self.style.shadow_offset_focused = offset;
    }

    /// Set the duration of self-managed press transitions, in seconds.
    pub fn set_animation_duration(&mut self, seconds: f32) {
        self.style.animation_duration = seconds;
    }

    /// Set the title color used while focused.
    pub fn set_focused_title_color(&mut self, color: Color) {
        self.style.focused_title_color = color;
        self.base.update();
    }

    /// Set the title color used while not focused.
    pub fn set_normal_title_color(&mut self, color: Color) {
        self.style.normal_title_color = color;
        self.base.update();
    }

    /// Set the gradient axis for both states.
    pub fn set_gradient_points(&mut self, start: Point, end: Point) {
        self.style.gradient_start_point = start;
        self.style.gradient_end_point = end;
        self.gradient_view.set_gradient_points(start, end);
    }

    fn sync_gradient_colors(&mut self) {
        let colors = self.normal_gradient_colors();
        self.gradient_view.set_colors(colors);
        self.base.update();
    }

    // =========================================================================
    // Focus Transitions
    // =========================================================================

    /// React to a focus change delivered by the host's focus engine.
    ///
    /// Schedules the visual transition into `scope` so it runs coordinated
    /// with the host's own focus animation; nothing is applied immediately.
    /// Gaining focus scales the button by `focused_scale_factor`, disables
    /// bounds clipping so the drop shadow shows, and swaps the gradient to
    /// the focused pair. Losing focus reverses all three.
    pub fn focus_changed(&mut self, is_focused: bool, scope: &mut dyn AnimationScope) {
        self.base.set_focused(is_focused);
        self.visual_state = if is_focused {
            VisualState::Focused
        } else {
            VisualState::Normal
        };

        tracing::debug!(
            target: targets::WIDGET,
            id = self.base.object_id().as_raw(),
            is_focused,
            "focus changed"
        );

        // Target values are computed now, at scheduling time, so later style
        // mutations do not retroactively change an in-flight transition.
        let (transform, masks_to_bounds, colors) = if is_focused {
            (
                Transform2D::scale(self.style.focused_scale_factor),
                false,
                self.focused_gradient_colors(),
            )
        } else {
            (Transform2D::IDENTITY, true, self.normal_gradient_colors())
        };

        let button_layer = self.base.layer().downgrade();
        let gradient_layer = self.gradient_view.layer().downgrade();
        scope.add_animation(Animation::untimed(move || {
            let Some(button_layer) = button_layer.upgrade() else {
                return;
            };
            button_layer.set_transform(transform);
            button_layer.set_masks_to_bounds(masks_to_bounds);
            if let Some(gradient_layer) = gradient_layer.upgrade() {
                gradient_layer.set_gradient_colors(Some(colors));
            }
        }));

        self.focus_state_changed.emit(is_focused);
    }

    // =========================================================================
    // Press Transitions
    // =========================================================================

    /// React to a press beginning.
    ///
    /// Depresses the button: transform back to identity and shadow offset to
    /// the pressed offset, regardless of focus state.
    pub fn presses_began(&mut self) {
        let layer = self.base.layer().downgrade();
        self.animator
            .animate(self.press_duration(), Easing::EaseInOut, move || {
                if let Some(layer) = layer.upgrade() {
                    layer.set_transform(Transform2D::IDENTITY);
                    layer.set_shadow_offset(PRESSED_SHADOW_OFFSET);
                }
            });
    }

    /// React to a press ending normally.
    ///
    /// No-op unless the button is focused; a press released on an unfocused
    /// button has nothing to restore.
    pub fn presses_ended(&mut self) {
        if !self.base.has_focus() {
            return;
        }
        self.restore_focused_appearance();
    }

    /// React to the system cancelling a press. Same restore rule as
    /// [`presses_ended`](Self::presses_ended).
    pub fn presses_cancelled(&mut self) {
        if !self.base.has_focus() {
            return;
        }
        self.restore_focused_appearance();
    }

    fn restore_focused_appearance(&mut self) {
        let scale = self.style.focused_scale_factor;
        let offset = self.style.shadow_offset_focused;
        let layer = self.base.layer().downgrade();
        self.animator
            .animate(self.press_duration(), Easing::EaseInOut, move || {
                if let Some(layer) = layer.upgrade() {
                    layer.set_transform(Transform2D::scale(scale));
                    layer.set_shadow_offset(offset);
                }
            });
    }

    fn press_duration(&self) -> Duration {
        Duration::from_secs_f32(self.style.animation_duration.max(0.0))
    }

    /// The button's press animator, for the host to drain each frame.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}

impl Object for FocusableButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for FocusableButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.base.size())
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Press(press) => {
                match press.phase {
                    PressPhase::Began => {
                        self.presses_began();
                        self.pressed.emit(());
                    }
                    PressPhase::Ended => {
                        self.presses_ended();
                        self.released.emit(());
                    }
                    PressPhase::Cancelled => {
                        self.presses_cancelled();
                    }
                }
                event.accept();
                true
            }
            WidgetEvent::Resize(resize) => {
                // The gradient fill tracks the button's bounds exactly.
                self.gradient_view.set_geometry(Rect {
                    origin: Point::ZERO,
                    size: resize.new_size,
                });
                true
            }
        }
    }
}

static_assertions::assert_impl_all!(FocusableButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::CoordinatedAnimations;
    use crate::widget::events::{PressEvent, ResizeEvent};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn focused_button() -> FocusableButton {
        // Enable log output for tests run with RUST_LOG set.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));
        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(true, &mut coordinator);
        coordinator.run();
        button
    }

    #[test]
    fn test_construction_applies_style() {
        let button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));

        assert_eq!(button.layer().corner_radius(), 5.0);
        assert!(button.layer().masks_to_bounds());
        assert!(button.layer().transform().is_identity());
        assert_eq!(button.visual_state(), VisualState::Normal);

        let shadow = button.layer().shadow();
        assert_eq!(shadow.offset, Size::new(0.0, 27.0));
        assert_eq!(shadow.blur_radius, 10.0);
        assert_eq!(shadow.opacity, 0.25);

        // Child gradient starts with the normal pair and matching radius.
        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::WHITE, Color::WHITE])
        );
        assert_eq!(button.gradient_view().corner_radius(), 5.0);
        assert_eq!(button.gradient_view().geometry(), button.rect());
    }

    #[test]
    fn test_end_color_falls_back_to_primary() {
        let button = FocusableButton::new();
        assert_eq!(button.focused_gradient_colors(), [Color::RED, Color::RED]);
        assert_eq!(
            button.normal_gradient_colors(),
            [Color::WHITE, Color::WHITE]
        );
    }

    #[test]
    fn test_end_color_override() {
        let mut button = FocusableButton::new();
        button.set_normal_background_color(Color::BLUE);
        button.set_normal_background_end_color(Some(Color::GREEN));

        // The child gradient reflects the pair immediately, without any
        // focus event.
        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::BLUE, Color::GREEN])
        );
    }

    #[test]
    fn test_normal_color_setter_updates_child_while_focused() {
        let mut button = focused_button();
        button.set_normal_background_color(Color::GRAY);

        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::GRAY, Color::GRAY])
        );
    }

    #[test]
    fn test_focus_gain_schedules_focused_appearance() {
        let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));
        let mut coordinator = CoordinatedAnimations::new();

        button.focus_changed(true, &mut coordinator);

        // Deferred: nothing applied until the coordinator runs.
        assert!(button.layer().transform().is_identity());
        assert_eq!(coordinator.pending(), 1);

        coordinator.run();
        assert_eq!(button.layer().transform().scale_factors(), (1.2, 1.2));
        assert!(!button.layer().masks_to_bounds());
        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::RED, Color::RED])
        );
    }

    #[test]
    fn test_focus_round_trip_restores_initial_appearance() {
        let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));

        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(true, &mut coordinator);
        coordinator.run();

        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(false, &mut coordinator);
        coordinator.run();

        assert!(button.layer().transform().is_identity());
        assert!(button.layer().masks_to_bounds());
        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::WHITE, Color::WHITE])
        );
        assert_eq!(button.visual_state(), VisualState::Normal);
        assert!(!button.has_focus());
    }

    #[test]
    fn test_focus_signal_emitted() {
        let mut button = FocusableButton::new();
        let seen = Arc::new(AtomicBool::new(false));

        let seen_clone = seen.clone();
        button.focus_state_changed.connect(move |&focused| {
            seen_clone.store(focused, Ordering::SeqCst);
        });

        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(true, &mut coordinator);
        assert!(seen.load(Ordering::SeqCst));
    }

    #[test]
    fn test_press_began_depresses_regardless_of_focus() {
        for focused in [false, true] {
            let mut button = if focused {
                focused_button()
            } else {
                FocusableButton::new()
            };

            button.presses_began();
            button.animator().run_pending();

            assert!(button.layer().transform().is_identity());
            assert_eq!(button.layer().shadow().offset, Size::new(0.0, 10.0));
        }
    }

    #[test]
    fn test_press_ended_noop_when_unfocused() {
        let mut button = FocusableButton::new();
        button.presses_began();
        button.animator().run_pending();

        button.presses_ended();
        assert_eq!(button.animator().pending(), 0);
        assert_eq!(button.layer().shadow().offset, Size::new(0.0, 10.0));
    }

    #[test]
    fn test_press_cycle_while_focused_restores_focused_look() {
        let mut button = focused_button();

        button.presses_began();
        button.animator().run_pending();
        assert!(button.layer().transform().is_identity());

        button.presses_ended();
        button.animator().run_pending();
        assert_eq!(button.layer().transform().scale_factors(), (1.2, 1.2));
        assert_eq!(button.layer().shadow().offset, Size::new(0.0, 27.0));
    }

    #[test]
    fn test_press_cancelled_restores_like_ended() {
        let mut button = focused_button();
        button.presses_began();
        button.animator().run_pending();

        button.presses_cancelled();
        button.animator().run_pending();
        assert_eq!(button.layer().transform().scale_factors(), (1.2, 1.2));
        assert_eq!(button.layer().shadow().offset, Size::new(0.0, 27.0));
    }

    #[test]
    fn test_press_events_route_and_emit() {
        let mut button = focused_button();
        let released = Arc::new(AtomicBool::new(false));

        let released_clone = released.clone();
        button.released.connect(move |_| {
            released_clone.store(true, Ordering::SeqCst);
        });

        let mut event = WidgetEvent::Press(PressEvent::new(PressPhase::Began));
        assert!(button.event(&mut event));
        assert!(event.is_accepted());

        let mut event = WidgetEvent::Press(PressEvent::new(PressPhase::Ended));
        assert!(button.event(&mut event));
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_resize_tracks_gradient_child() {
        let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));
        button.set_geometry(Rect::new(0.0, 0.0, 400.0, 120.0));

        let mut event = WidgetEvent::Resize(ResizeEvent::new(
            Size::new(300.0, 80.0),
            Size::new(400.0, 120.0),
        ));
        assert!(button.event(&mut event));
        assert_eq!(
            button.gradient_view().geometry(),
            Rect::new(0.0, 0.0, 400.0, 120.0)
        );
    }

    #[test]
    fn test_title_color_tracks_state() {
        let mut button = FocusableButton::new();
        button.set_normal_title_color(Color::GRAY);
        button.set_focused_title_color(Color::RED);
        assert_eq!(button.current_title_color(), Color::GRAY);

        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(true, &mut coordinator);
        assert_eq!(button.current_title_color(), Color::RED);
    }

    #[test]
    fn test_targets_computed_at_scheduling_time() {
        let mut button = FocusableButton::new();
        let mut coordinator = CoordinatedAnimations::new();
        button.focus_changed(true, &mut coordinator);

        // Changing the style after scheduling must not affect the in-flight
        // transition.
        button.set_focused_background_color(Color::BLUE);
        coordinator.run();

        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::RED, Color::RED])
        );
    }

    #[test]
    fn test_apply_style_reruns_setup() {
        let mut button = FocusableButton::new();
        let style = ButtonStyle {
            corner_radius: 12.0,
            normal_background_color: Color::BLUE,
            normal_background_end_color: Some(Color::GREEN),
            ..ButtonStyle::default()
        };
        button.apply_style(style);

        assert_eq!(button.layer().corner_radius(), 12.0);
        assert_eq!(button.gradient_view().corner_radius(), 12.0);
        assert_eq!(
            button.gradient_view().colors(),
            Some([Color::BLUE, Color::GREEN])
        );
    }

    #[test]
    fn test_style_from_json() {
        let style = ButtonStyle::from_json(
            r##"{
                "focused_background_color": "#0000FF",
                "shadow_offset_focused": { "width": 0.0, "height": 16.0 },
                "focused_scale_factor": 1.1
            }"##,
        )
        .unwrap();

        assert_eq!(style.focused_background_color, Color::BLUE);
        assert_eq!(style.shadow_offset_focused, Size::new(0.0, 16.0));
        assert_eq!(style.focused_scale_factor, 1.1);
        // Unspecified fields keep their defaults.
        assert_eq!(style.normal_background_color, Color::WHITE);
        assert_eq!(style.animation_duration, 0.2);

        assert!(ButtonStyle::from_json("{ not json").is_err());
    }

    #[test]
    fn test_deferred_work_skips_dropped_button() {
        let button = FocusableButton::new();
        let weak = button.layer().downgrade();

        let mut coordinator = CoordinatedAnimations::new();
        coordinator.add_animation(Animation::untimed(move || {
            if let Some(layer) = weak.upgrade() {
                layer.set_corner_radius(99.0);
            }
        }));

        drop(button);
        // Must not panic; the work body is skipped.
        coordinator.run();
    }
}
