use array_init::array_init;
use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// &point - &point = vector
impl<'a, 'b, T, const N: usize> Sub<&'a Point<T, N>> for &'b Point<T, N>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn sub(self: &'b Point<T, N>, other: &'a Point<T, N>) -> Self::Output {
    Vector(array_init(|i| {
      self.array[i].clone() - other.array[i].clone()
    }))
  }
}
