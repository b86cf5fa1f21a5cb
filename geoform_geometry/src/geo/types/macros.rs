/// Implements `From` conversions from vectors, slices and arrays of anything the
/// element type converts from, plus [`CompositeGeometryTrait`](super::CompositeGeometryTrait).
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<T, const N: usize> From<[T; N]> for $t
		where
			$i: From<T>,
		{
			fn from(value: [T; N]) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		$crate::geo::types::macros::impl_composite!($t, $i);
	)*}
}

/// Implements [`CompositeGeometryTrait`](super::CompositeGeometryTrait) for a newtype over `Vec<Item>`.
macro_rules! impl_composite {
	($t:ty,$i:ty) => {
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn as_slice(&self) -> &[$i] {
				&self.0
			}

			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}
	};
}

pub(crate) use impl_composite;
pub(crate) use impl_from_array;
