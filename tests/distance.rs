use approx::assert_relative_eq;
use rbfopt::distance::{self, DistanceError};

type Distance = fn(&[f64], &[f64]) -> Result<f64, DistanceError>;

const ALL: [(&str, Distance); 6] = [
    ("euclidean", distance::euclidean),
    ("manhattan", distance::manhattan),
    ("chebyshev", distance::chebyshev),
    ("sum_of_squares", distance::sum_of_squares),
    ("mean_square", distance::mean_square),
    ("root_mean_square", distance::root_mean_square),
];

#[test]
fn known_distances() {
    let p = [0.0, 0.0];
    let q = [3.0, 4.0];
    assert_relative_eq!(distance::euclidean(&p, &q).unwrap(), 5.0);
    assert_relative_eq!(distance::manhattan(&p, &q).unwrap(), 7.0);
    assert_relative_eq!(distance::chebyshev(&p, &q).unwrap(), 4.0);
    assert_relative_eq!(distance::sum_of_squares(&p, &q).unwrap(), 25.0);
    assert_relative_eq!(distance::mean_square(&p, &q).unwrap(), 12.5);
    assert_relative_eq!(distance::root_mean_square(&p, &q).unwrap(), 12.5f64.sqrt());
}

#[test]
fn chebyshev_uses_absolute_differences() {
    assert_relative_eq!(
        distance::chebyshev(&[1.0, 5.0, -2.0], &[2.0, 3.0, 4.0]).unwrap(),
        6.0
    );
}

#[test]
fn identical_vectors_are_zero_apart() {
    let p = [1.5, -2.0, 8.0];
    for (name, f) in ALL {
        assert_eq!(f(&p, &p), Ok(0.0), "{name}");
    }
}

#[test]
fn distances_are_symmetric() {
    let p = [1.0, -2.0, 0.5];
    let q = [-3.0, 4.0, 2.5];
    for (name, f) in ALL {
        assert_relative_eq!(f(&p, &q).unwrap(), f(&q, &p).unwrap());
        assert!(f(&p, &q).unwrap() > 0.0, "{name}");
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    for (name, f) in ALL {
        assert_eq!(
            f(&[1.0], &[1.0, 2.0]),
            Err(DistanceError::MismatchedLengths(1, 2)),
            "{name}"
        );
        assert_eq!(f(&[], &[]), Err(DistanceError::ZeroLength), "{name}");
    }
}
