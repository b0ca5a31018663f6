//! Lantern UI — a retained widget tree over the `lantern-gfx` draw list.
//!
//! Elements form a strict tree; each stores a normalized [0,1] rectangle
//! relative to its parent, so a whole interface scales with the viewport for
//! free. Trees are either assembled in code or built from a declarative JSON
//! document, and a document on disk can be hot-reloaded in place while the
//! application keeps running.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lantern_ui::prelude::*;
//!
//! // Resource tables are owned by the application; the UI stores handles.
//! let context = Context::new(ShaderId(0), FontId(0), MeshId(0));
//! let mut actions = ActionRegistry::new();
//! actions.register("save", || log::info!("saved"));
//!
//! let factory = Factory::new(shaders, meshes, colors, FontId(0), context, actions);
//! let loader = Loader::new(factory);
//!
//! let mut system = System::new();
//! let mut hud = None;
//! let mut watcher = Watcher::new();
//!
//! // Frame loop:
//! watcher.reload_if_changed("ui/hud.json", &mut system, &loader, &mut hud, true);
//! system.handle_event(&UiEvent::PointerMove { x, y }, viewport);
//! let mut painter = Painter::new(&mut draw_list, &fonts, viewport);
//! system.render(&mut painter);
//! // Hand draw_list to your renderer.
//! ```

pub mod action;
pub mod context;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod factory;
pub mod loader;
pub mod painter;
pub mod system;
pub mod watcher;
pub mod widgets;

/// Everything needed to build, load, and drive a UI tree.
pub mod prelude {
    pub use crate::action::{Action, ActionRegistry};
    pub use crate::context::Context;
    pub use crate::document::Document;
    pub use crate::element::ElementRef;
    pub use crate::error::UiError;
    pub use crate::event::{Key, MouseButton, UiEvent};
    pub use crate::factory::Factory;
    pub use crate::loader::Loader;
    pub use crate::painter::Painter;
    pub use crate::system::System;
    pub use crate::watcher::Watcher;
    pub use crate::widgets::{
        button::Button,
        canvas::Canvas,
        layout::{HorizontalLayout, VerticalLayout},
        list::List,
        text::{Text, TextAlign},
        text_field::TextField,
        text_lines::TextLines,
        WidgetCast, WidgetKind,
    };

    // Re-export the gfx primitives everything touches.
    pub use lantern_gfx::coords::{Bounds, Rect, Vec2, Viewport};
    pub use lantern_gfx::paint::Color;
    pub use lantern_gfx::resources::{MeshId, ShaderId};
    pub use lantern_gfx::scene::DrawList;
    pub use lantern_gfx::text::{FontId, FontSystem};
}
