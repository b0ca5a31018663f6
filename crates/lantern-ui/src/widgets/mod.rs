//! Concrete widget variants.
//!
//! The widget set is closed: every element carries one [`WidgetKind`] and the
//! tree dispatches render/event handling by matching on it. Each variant's
//! state lives in its own module; the tree structure itself (name, bounds,
//! children, flags) stays in [`crate::element`].

pub mod button;
pub mod canvas;
pub mod layout;
pub mod list;
pub mod text;
pub mod text_field;
pub mod text_lines;

use button::Button;
use canvas::Canvas;
use layout::{HorizontalLayout, VerticalLayout};
use list::List;
use text::Text;
use text_field::TextField;
use text_lines::TextLines;

/// The widget payload of an element.
pub enum WidgetKind {
    /// Invisible grouping node; renders nothing, recurses into children.
    Group,
    Canvas(Canvas),
    Button(Button),
    Text(Text),
    TextLines(TextLines),
    TextField(TextField),
    HorizontalLayout(HorizontalLayout),
    VerticalLayout(VerticalLayout),
    List(List),
}

impl WidgetKind {
    /// Variant name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Group => "Group",
            WidgetKind::Canvas(_) => "Canvas",
            WidgetKind::Button(_) => "Button",
            WidgetKind::Text(_) => "Text",
            WidgetKind::TextLines(_) => "TextLines",
            WidgetKind::TextField(_) => "TextField",
            WidgetKind::HorizontalLayout(_) => "HorizontalLayout",
            WidgetKind::VerticalLayout(_) => "VerticalLayout",
            WidgetKind::List(_) => "List",
        }
    }
}

/// Typed access to the widget payload, used by
/// [`ElementRef::with_child`](crate::element::ElementRef::with_child) to
/// recover a concrete widget from a child looked up by name.
pub trait WidgetCast: Sized {
    const NAME: &'static str;
    fn from_kind(kind: &WidgetKind) -> Option<&Self>;
    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self>;
}

macro_rules! impl_widget_variant {
    ($ty:ident) => {
        impl WidgetCast for $ty {
            const NAME: &'static str = stringify!($ty);

            fn from_kind(kind: &WidgetKind) -> Option<&Self> {
                match kind {
                    WidgetKind::$ty(w) => Some(w),
                    _ => None,
                }
            }

            fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
                match kind {
                    WidgetKind::$ty(w) => Some(w),
                    _ => None,
                }
            }
        }

        impl From<$ty> for WidgetKind {
            fn from(w: $ty) -> WidgetKind {
                WidgetKind::$ty(w)
            }
        }
    };
}

impl_widget_variant!(Canvas);
impl_widget_variant!(Button);
impl_widget_variant!(Text);
impl_widget_variant!(TextLines);
impl_widget_variant!(TextField);
impl_widget_variant!(HorizontalLayout);
impl_widget_variant!(VerticalLayout);
impl_widget_variant!(List);
