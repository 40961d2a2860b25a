use std::thread;

use approx::assert_relative_eq;
use residua_core::{LeastSquaresProblem, evaluate};
use residua_models::circle::{CircleResidualModel, Point};

fn observed() -> CircleResidualModel {
    let mut model = CircleResidualModel::new();
    model.add_point(30.0, 68.0);
    model.add_point(50.0, -6.0);
    model.add_point(110.0, -20.0);
    model.add_point(35.0, 15.0);
    model.add_point(45.0, 97.0);
    model
}

/// Undamped Gauss-Newton on a two-parameter problem, standing in for an
/// external solver.
fn gauss_newton<P>(problem: &P, mut x: [f64; 2], max_iters: usize) -> [f64; 2]
where
    P: LeastSquaresProblem<2>,
{
    for _ in 0..max_iters {
        let eval = evaluate(problem, x).expect("evaluation should succeed");

        // Normal equations: (JᵀJ) dx = -Jᵀr.
        let (mut a, mut b, mut d) = (0.0, 0.0, 0.0);
        for row in &eval.jacobian {
            a += row[0] * row[0];
            b += row[0] * row[1];
            d += row[1] * row[1];
        }
        let [g0, g1] = eval.gradient();
        let det = a * d - b * b;
        let step = [-(d * g0 - b * g1) / det, -(a * g1 - b * g0) / det];

        x = [x[0] + step[0], x[1] + step[1]];
        if step[0].hypot(step[1]) < 1e-12 {
            break;
        }
    }
    x
}

#[test]
fn solver_recovers_known_circle() {
    let model = observed();

    let center = gauss_newton(&model, [98.680, 47.345], 50);

    assert_relative_eq!(center[0], 96.075_902_096, epsilon = 1e-8);
    assert_relative_eq!(center[1], 48.135_167_894, epsilon = 1e-8);
    assert_relative_eq!(
        model.mean_radius(&Point::from(center)).unwrap(),
        69.960_161_753,
        epsilon = 1e-8
    );
}

#[test]
fn solver_recovers_exact_circle() {
    let center = [-4.0, 11.0];
    let radius = 3.0;
    let model: CircleResidualModel = [0.3, 1.1, 2.0, 2.9, 4.4, 5.6]
        .into_iter()
        .map(|theta: f64| {
            Point::new(
                center[0] + radius * theta.cos(),
                center[1] + radius * theta.sin(),
            )
        })
        .collect();

    let fitted = gauss_newton(&model, [-3.0, 10.0], 50);

    assert_relative_eq!(fitted[0], center[0], epsilon = 1e-9);
    assert_relative_eq!(fitted[1], center[1], epsilon = 1e-9);
    let eval = evaluate(&model, fitted).unwrap();
    assert_relative_eq!(eval.cost(), 0.0, epsilon = 1e-18);
}

#[test]
fn evaluates_concurrently_once_built() {
    let model = observed();
    let centers = [[0.0, 0.0], [50.0, 50.0], [96.0, 48.0], [-10.0, 200.0]];

    let sequential: Vec<_> = centers
        .iter()
        .map(|c| (model.residuals(c).unwrap(), model.jacobian(c).unwrap()))
        .collect();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = centers
            .iter()
            .map(|c| {
                let model = &model;
                scope.spawn(move || (model.residuals(c).unwrap(), model.jacobian(c).unwrap()))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[cfg(feature = "serde")]
#[test]
fn deserializes_points_in_order() {
    let json = r#"{"points":[{"x":1.0,"y":0.0},{"x":0.0,"y":1.0},{"x":-1.0,"y":0.0}]}"#;

    let model: CircleResidualModel = serde_json::from_str(json).unwrap();

    assert_eq!(model.point_count(), 3);
    assert_eq!(model.points()[1], Point::new(0.0, 1.0));
    assert_relative_eq!(model.mean_radius(&Point::new(0.0, 0.0)).unwrap(), 1.0);
}
