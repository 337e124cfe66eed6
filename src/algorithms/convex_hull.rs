use std::fmt;
use std::str::FromStr;

use crate::data::{Hull, Point};
use crate::{Error, HullScalar};

pub mod gift_wrapping;
pub mod monotone_chain;

/// Choice of hull builder.
///
/// The builders agree on which polygon is the hull but not on which of its
/// boundary points are vertices:
///
/// * [`Algorithm::GiftWrapping`] may keep points that lie on a hull edge.
/// * [`Algorithm::MonotoneChain`] never keeps them.
///
/// ```rust
/// # use rhull::algorithms::Algorithm;
/// # use rhull::data::Point;
/// let algorithm: Algorithm = "jarvis".parse().unwrap();
/// let pts = vec![Point::new([0.0, 0.0]), Point::new([2.0, 0.0]), Point::new([1.0, 1.0])];
/// assert_eq!(algorithm.convex_hull(pts).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
  GiftWrapping,
  #[default]
  MonotoneChain,
}

impl Algorithm {
  pub fn convex_hull<T>(self, pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
  where
    T: HullScalar,
  {
    match self {
      Algorithm::GiftWrapping => gift_wrapping::convex_hull(pts),
      Algorithm::MonotoneChain => monotone_chain::convex_hull(pts),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Algorithm::GiftWrapping => write!(f, "gift-wrapping"),
      Algorithm::MonotoneChain => write!(f, "monotone-chain"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown convex hull algorithm: {}", self.0)
  }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
  type Err = UnknownAlgorithm;
  fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
    match s.trim().to_ascii_lowercase().as_str() {
      "gift-wrapping" | "gift_wrapping" | "jarvis" => Ok(Algorithm::GiftWrapping),
      "monotone-chain" | "monotone_chain" | "andrew" => Ok(Algorithm::MonotoneChain),
      _ => Err(UnknownAlgorithm(s.to_string())),
    }
  }
}

fn ensure_finite<T: HullScalar>(pts: &[Point<T>]) -> Result<(), Error> {
  if pts.iter().all(Point::is_finite) {
    Ok(())
  } else {
    Err(Error::NonFiniteCoordinate)
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use proptest::collection::vec;
  use proptest::prelude::*;
  use proptest::test_runner::TestCaseError;
  use test_strategy::proptest;

  #[test]
  fn parse_names() {
    assert_eq!("gift-wrapping".parse(), Ok(Algorithm::GiftWrapping));
    assert_eq!(" Andrew ".parse(), Ok(Algorithm::MonotoneChain));
    assert_err_eq!(
      "quickhull".parse::<Algorithm>(),
      UnknownAlgorithm("quickhull".to_string())
    );
  }

  #[test]
  fn display_round_trips() {
    for algorithm in [Algorithm::GiftWrapping, Algorithm::MonotoneChain] {
      assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
    }
    assert_eq!(Algorithm::default(), Algorithm::MonotoneChain);
  }

  #[test]
  fn rejects_non_finite() {
    for algorithm in [Algorithm::GiftWrapping, Algorithm::MonotoneChain] {
      let pts = vec![Point::new([0.0, 0.0]), Point::new([f64::INFINITY, 1.0])];
      assert_err_eq!(algorithm.convex_hull(pts), Error::NonFiniteCoordinate);
    }
  }

  // Both builders describe the same polygon, whatever they decide about
  // points lying on its edges.
  fn check_agree(pts: Vec<Point<f64>>) -> Result<(), TestCaseError> {
    let wrapped = assert_ok!(Algorithm::GiftWrapping.convex_hull(pts.clone()));
    let chained = assert_ok!(Algorithm::MonotoneChain.convex_hull(pts));
    for pt in chained.iter() {
      prop_assert!(wrapped.points().contains(pt));
    }
    for pt in wrapped.iter() {
      prop_assert_eq!(chained.locate(pt), PointLocation::OnBoundary);
    }
    Ok(())
  }

  #[proptest]
  fn builders_agree(#[strategy(vec(any_pt(), 0..60))] pts: Vec<Point<f64>>) {
    check_agree(pts)?;
  }

  #[proptest]
  fn builders_agree_near_colinear(
    #[strategy(vec(any_near_colinear_pt(), 0..40))] pts: Vec<Point<f64>>,
  ) {
    check_agree(pts)?;
  }
}
