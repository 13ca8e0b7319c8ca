// Reeds-Shepp waypoint sampling demo
//
// Ranks a few candidate plans with a reverse-aware cost, samples the
// cheapest one into waypoints and plots them.
use std::f64::consts::{FRAC_PI_2, PI};

use reeds_shepp_motion::common::{poses_to_path, MotionResult, Pose2D};
use reeds_shepp_motion::path_planning::reeds_shepp::{cheapest, ActionSet, CostWeights, Gear, Steer};
use reeds_shepp_motion::utils::{colors, PathStyle, Visualizer};

fn candidate_plans() -> MotionResult<Vec<ActionSet>> {
    // Forward-only loop: LfSfLf
    let forward = ActionSet::from_triples(vec![
        (Steer::Left, Gear::Forward, FRAC_PI_2),
        (Steer::Straight, Gear::Forward, 2.0),
        (Steer::Left, Gear::Forward, FRAC_PI_2),
    ])?;

    // Shorter, but with a cusp: LfRbLf
    let cusp = ActionSet::from_triples(vec![
        (Steer::Left, Gear::Forward, PI / 3.0),
        (Steer::Right, Gear::Backward, PI / 2.0),
        (Steer::Left, Gear::Forward, PI / 3.0),
    ])?;

    // What a solver reports when a word has no solution
    let unsolved = ActionSet::infeasible();

    Ok(vec![forward, cusp, unsolved])
}

fn main() -> MotionResult<()> {
    env_logger::init();
    println!("Reeds Shepp waypoint sampling start!!");

    let start = Pose2D::new(-1.0, -4.0, (-20.0_f64).to_radians());
    let turn_radius = 3.0;
    let weights = CostWeights::default()
        .with_unit(turn_radius)
        .with_reverse_cost_multiplier(2.0)
        .with_gear_switch_cost(1.5);

    let plans = candidate_plans()?;
    for plan in &plans {
        println!("[{}] cost: {}", plan, plan.cost(&weights)?);
    }

    let best = match cheapest(&plans, &weights)? {
        Some(plan) => plan,
        None => {
            println!("No feasible plan");
            return Ok(());
        }
    };
    println!("Selected plan: {}", best);

    let waypoints = best.get_directed_waypoints(&start, turn_radius)?;
    println!("Sampled {} waypoints", waypoints.len());
    let poses: Vec<Pose2D> = waypoints.iter().map(|(pose, _)| *pose).collect();
    let goal = poses[poses.len() - 1];
    println!("Final pose: x={:.3} y={:.3} yaw={:.3}", goal.x, goal.y, goal.yaw);

    let mut vis = Visualizer::new();
    vis.set_title("Reeds-Shepp Waypoints")
        .plot_path(&poses_to_path(&poses), &PathStyle::new(colors::PATH, "Chord path").with_line_width(1.0))
        .plot_waypoints(&waypoints, 0.3)
        .plot_start(&start)
        .plot_goal(&goal);

    std::fs::create_dir_all("img/path_planning")?;
    let output_path = "img/path_planning/reeds_shepp_waypoints.png";
    vis.save_png(output_path, 800, 600)?;
    println!("Plot saved to: {}", output_path);

    println!("Reeds Shepp waypoint sampling finish!!");
    Ok(())
}
