//! Property visitation protocol.
//!
//! Rust has no built-in field reflection, so every animatable type describes its own
//! layout by implementing [`Property::accept`]: a struct announces each named field
//! through [`field`](dyn PropertyVisitor::field) and lets the field's type describe
//! itself in turn. Leaf kinds:
//!
//! - numeric (all integer widths, `f32`, `f64`, `bool`): the only writable leaves
//! - text (`String`)
//! - opaque handles (`Box<T>`, `Rc<T>`, `Arc<T>`)
//! - sequences (`Vec<T>`, `[T; N]`, `[T]`)
//! - nested structs (anything else implementing [`Property`])
//!
//! `Option<T>` is an unnamed wrapper: it forwards to the inner value without adding a
//! path segment.

use std::rc::Rc;
use std::sync::Arc;

use crate::ids::ComponentKind;

/// Mutable view of one arithmetic leaf.
#[derive(Debug)]
pub enum NumericMut<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    Bool(&'a mut bool),
}

impl NumericMut<'_> {
    /// Store a sampled value. Integers follow `as` semantics (truncate toward zero,
    /// saturate at the bounds, NaN -> 0); `bool` becomes `value != 0.0`.
    pub fn set_from_f32(&mut self, value: f32) {
        match self {
            NumericMut::F32(v) => **v = value,
            NumericMut::F64(v) => **v = value as f64,
            NumericMut::I8(v) => **v = value as i8,
            NumericMut::I16(v) => **v = value as i16,
            NumericMut::I32(v) => **v = value as i32,
            NumericMut::I64(v) => **v = value as i64,
            NumericMut::Isize(v) => **v = value as isize,
            NumericMut::U8(v) => **v = value as u8,
            NumericMut::U16(v) => **v = value as u16,
            NumericMut::U32(v) => **v = value as u32,
            NumericMut::U64(v) => **v = value as u64,
            NumericMut::Usize(v) => **v = value as usize,
            NumericMut::Bool(v) => **v = value != 0.0,
        }
    }

    pub fn as_f32(&self) -> f32 {
        match self {
            NumericMut::F32(v) => **v,
            NumericMut::F64(v) => **v as f32,
            NumericMut::I8(v) => **v as f32,
            NumericMut::I16(v) => **v as f32,
            NumericMut::I32(v) => **v as f32,
            NumericMut::I64(v) => **v as f32,
            NumericMut::Isize(v) => **v as f32,
            NumericMut::U8(v) => **v as f32,
            NumericMut::U16(v) => **v as f32,
            NumericMut::U32(v) => **v as f32,
            NumericMut::U64(v) => **v as f32,
            NumericMut::Usize(v) => **v as f32,
            NumericMut::Bool(v) => {
                if **v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Receiver of a [`Property`] walk.
///
/// Every `enter` is matched by exactly one `exit`; `None` marks an unnamed level.
pub trait PropertyVisitor {
    fn enter(&mut self, name: Option<&str>);
    fn exit(&mut self);
    fn visit_numeric(&mut self, value: NumericMut<'_>);
    fn visit_text(&mut self, _value: &mut String) {}
    fn visit_opaque(&mut self) {}
    fn visit_sequence(&mut self, _len: usize) {}
}

impl dyn PropertyVisitor + '_ {
    /// Visit a named field.
    pub fn field<P: Property + ?Sized>(&mut self, name: &str, value: &mut P) {
        self.enter(Some(name));
        value.accept(self);
        self.exit();
    }

    /// Visit an unnamed level; contributes no path segment.
    pub fn wrapped<P: Property + ?Sized>(&mut self, value: &mut P) {
        self.enter(None);
        value.accept(self);
        self.exit();
    }
}

/// A value that can describe its own layout to a [`PropertyVisitor`].
pub trait Property {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor);
}

/// A top-level component type that clips can target.
pub trait AnimatableComponent: Property {
    /// Stable kind name, used for persistence.
    const NAME: &'static str;
    /// Kind id, derived from [`NAME`](Self::NAME).
    const KIND: ComponentKind = ComponentKind::named(Self::NAME);
}

macro_rules! numeric_property {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Property for $ty {
                #[inline]
                fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
                    visitor.visit_numeric(NumericMut::$variant(self));
                }
            }
        )*
    };
}

numeric_property! {
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    bool => Bool,
}

impl Property for String {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_text(self);
    }
}

impl<T> Property for Vec<T> {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_sequence(self.len());
    }
}

impl<T> Property for [T] {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_sequence(self.len());
    }
}

impl<T, const N: usize> Property for [T; N] {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_sequence(N);
    }
}

impl<T: ?Sized> Property for Box<T> {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_opaque();
    }
}

impl<T: ?Sized> Property for Rc<T> {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_opaque();
    }
}

impl<T: ?Sized> Property for Arc<T> {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        visitor.visit_opaque();
    }
}

impl<T: Property> Property for Option<T> {
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        if let Some(inner) = self {
            visitor.wrapped(inner);
        }
    }
}

/// Implement [`Property`] for a struct by listing its fields in declaration order.
///
/// ```
/// use propcurve_core::impl_property;
///
/// #[derive(Default)]
/// struct Vector3 { x: f32, y: f32, z: f32 }
/// impl_property!(Vector3 { x, y, z });
///
/// #[derive(Default)]
/// struct Light { color_temp: f32, position: Vector3 }
/// impl_property!(Light { color_temp => "colorTemperature", position });
/// ```
#[macro_export]
macro_rules! impl_property {
    ($ty:ty { $($field:ident $(=> $name:literal)?),* $(,)? }) => {
        impl $crate::Property for $ty {
            fn accept(&mut self, visitor: &mut dyn $crate::PropertyVisitor) {
                $(
                    visitor.field(
                        $crate::__property_name!($field $(, $name)?),
                        &mut self.$field,
                    );
                )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __property_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}

/// Implement [`Property`] (via [`impl_property!`]) and [`AnimatableComponent`] for a
/// component struct.
///
/// ```
/// use propcurve_core::{animatable_component, AnimatableComponent, ComponentKind};
///
/// #[derive(Default)]
/// struct Opacity { alpha: f32 }
/// animatable_component!(Opacity = "Opacity" { alpha });
///
/// assert_eq!(Opacity::KIND, ComponentKind::named("Opacity"));
/// ```
#[macro_export]
macro_rules! animatable_component {
    ($ty:ty = $kind_name:literal { $($body:tt)* }) => {
        $crate::impl_property!($ty { $($body)* });
        impl $crate::AnimatableComponent for $ty {
            const NAME: &'static str = $kind_name;
        }
    };
}
