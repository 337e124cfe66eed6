use array_init::array_init;
use num_traits::Float;
use std::ops::Index;
use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Float,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Unit vector pointing in the same direction.
  ///
  /// Returns `None` for the zero vector, which has no direction. The vector is
  /// scaled by its largest component first, so tiny and huge vectors neither
  /// underflow nor overflow. Parallel vectors that differ by a power of two
  /// normalize to the same unit vector.
  pub fn normalize(&self) -> Option<Vector<T, N>> {
    let scale = self.0.iter().fold(T::zero(), |acc, c| acc.max(c.abs()));
    if scale == T::zero() {
      return None;
    }
    let scaled: Vector<T, N> = Vector(array_init(|i| self.0[i] / scale));
    let norm = scaled.magnitude();
    Some(Vector(array_init(|i| scaled.0[i] / norm)))
  }
}

impl<T: Float> Vector<T, 2> {
  /// z-component of the 3D cross product.
  pub fn cross(&self, other: &Vector<T, 2>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<'a, 'b, T, const N: usize> Sub<&'a Vector<T, N>> for &'b Vector<T, N>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn sub(self: &'b Vector<T, N>, other: &'a Vector<T, N>) -> Self::Output {
    Vector(array_init(|i| self.0[i].clone() - other.0[i].clone()))
  }
}
