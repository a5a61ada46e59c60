//! Edge property columns, indexed in lock-step with the slot arrays.

use std::collections::BTreeMap;

/// Named edge property columns attached to a graph.
pub type EdgeProps = BTreeMap<String, PropertyArray>;

/// A uniformly typed numeric column with one value per directed slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyArray {
    Int8(Vec<i8>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl PropertyArray {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            PropertyArray::Int8(v) => v.len(),
            PropertyArray::Uint16(v) => v.len(),
            PropertyArray::Int32(v) => v.len(),
            PropertyArray::Float32(v) => v.len(),
            PropertyArray::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the element type.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyArray::Int8(_) => "i8",
            PropertyArray::Uint16(_) => "u16",
            PropertyArray::Int32(_) => "i32",
            PropertyArray::Float32(_) => "f32",
            PropertyArray::Float64(_) => "f64",
        }
    }

    /// Gather `self[indices[k]]` into a new column of the same type.
    ///
    /// Panics if an index is out of bounds.
    pub fn pick_indices(&self, indices: &[usize]) -> PropertyArray {
        match self {
            PropertyArray::Int8(v) => PropertyArray::Int8(pick(v, indices)),
            PropertyArray::Uint16(v) => PropertyArray::Uint16(pick(v, indices)),
            PropertyArray::Int32(v) => PropertyArray::Int32(pick(v, indices)),
            PropertyArray::Float32(v) => PropertyArray::Float32(pick(v, indices)),
            PropertyArray::Float64(v) => PropertyArray::Float64(pick(v, indices)),
        }
    }

    /// Borrow the column as a typed slice, if `T` matches the stored type.
    pub fn as_slice<T: PropertyElement>(&self) -> Option<&[T]> {
        T::slice(self)
    }
}

fn pick<T: Copy>(values: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| values[i]).collect()
}

/// Element types that can be stored in a [`PropertyArray`].
pub trait PropertyElement: Copy + Default + 'static {
    /// Wrap a typed column.
    fn wrap(values: Vec<Self>) -> PropertyArray;
    /// Borrow a typed column back out.
    fn slice(array: &PropertyArray) -> Option<&[Self]>;
}

macro_rules! impl_property_element {
    ($t:ty, $variant:ident) => {
        impl PropertyElement for $t {
            fn wrap(values: Vec<Self>) -> PropertyArray {
                PropertyArray::$variant(values)
            }

            fn slice(array: &PropertyArray) -> Option<&[Self]> {
                match array {
                    PropertyArray::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<Vec<$t>> for PropertyArray {
            fn from(values: Vec<$t>) -> Self {
                PropertyArray::$variant(values)
            }
        }
    };
}

impl_property_element!(i8, Int8);
impl_property_element!(u16, Uint16);
impl_property_element!(i32, Int32);
impl_property_element!(f32, Float32);
impl_property_element!(f64, Float64);
