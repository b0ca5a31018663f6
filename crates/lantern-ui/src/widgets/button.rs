use lantern_gfx::coords::{Bounds, Vec2};
use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::text::FontId;

use crate::action::Action;
use crate::context::Context;
use crate::event::UiEvent;
use crate::painter::Painter;

/// Normalized inset of the hover halo around the button body.
const HALO_INSET: f32 = 0.01;

/// A clickable labeled rectangle.
///
/// While hovered, an enlarged halo in the pressed color is drawn behind the
/// body and the body switches to the hover color. A pointer-down anywhere
/// while hovered fires the optional [`Action`].
///
/// # Example
/// ```rust,ignore
/// let button = Button::new("Save", &context)
///     .color(Color::rgb(0.2, 0.2, 0.25))
///     .hover_color(Color::rgb(0.3, 0.3, 0.4))
///     .on_click(actions.get("save"));
/// let element = ElementRef::new("save", Bounds::new(0.4, 0.8, 0.6, 0.9), button);
/// ```
pub struct Button {
    pub label: String,
    pub color: Color,
    pub text_color: Color,
    pub hover_color: Color,
    pub pressed_color: Color,
    shader: ShaderId,
    mesh: MeshId,
    font: FontId,
    on_click: Option<Action>,
}

impl Button {
    pub fn new(label: impl Into<String>, context: &Context) -> Self {
        Self {
            label: label.into(),
            color: Color::black(),
            text_color: Color::white(),
            hover_color: Color::white(),
            pressed_color: Color::black(),
            shader: context.shader,
            mesh: context.mesh,
            font: context.font,
            on_click: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Body color while the cursor is over the button.
    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    /// Halo color drawn behind the body while hovered.
    pub fn pressed_color(mut self, color: Color) -> Self {
        self.pressed_color = color;
        self
    }

    /// Callback fired on pointer-down while hovered.
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn set_on_click(&mut self, action: Action) {
        self.on_click = Some(action);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub(crate) fn draw(&self, abs: Bounds, hovered: bool, painter: &mut Painter) {
        if hovered {
            // The x inset is scaled by the aspect ratio so the halo reads as
            // an even border on a non-square viewport.
            let halo = abs.inflate(HALO_INSET * painter.viewport().aspect(), HALO_INSET);
            painter.fill_bounds(self.shader, self.mesh, halo, self.pressed_color);
        }

        let body = if hovered { self.hover_color } else { self.color };
        painter.fill_bounds(self.shader, self.mesh, abs, body);

        let viewport = painter.viewport();
        let size = painter.measure_text(self.font, &self.label);
        let (cx, cy) = abs.center();
        let origin = Vec2::new(
            cx * viewport.width - size.x / 2.0,
            cy * viewport.height - size.y / 2.0,
        );
        painter.text(self.font, origin, self.label.clone(), self.text_color);
    }

    /// Returns the action to fire, if the event is a click on this button.
    ///
    /// The caller invokes it after releasing its borrow of the tree, so the
    /// action is free to mutate any element.
    pub(crate) fn handle(&mut self, event: &UiEvent, hovered: bool) -> Option<Action> {
        if let UiEvent::PointerDown { .. } = event {
            if hovered {
                return self.on_click.clone();
            }
        }
        None
    }
}
