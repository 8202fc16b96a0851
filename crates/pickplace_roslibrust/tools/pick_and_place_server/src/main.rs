use std::sync::Arc;

use anyhow::{Context, Result};
use roslibrust::rosbridge::ClientHandle;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pick_and_place_server::bridge::{
    active_status, feedback_msg, goal_from_msg, result_msg, status_array, ActionTopics,
    ActiveRosGoal, STATUS_PERIOD,
};
use pick_and_place_server::config::Config;
use pick_and_place_server::messages::actionlib_msgs::{GoalID, GoalStatusArray};
use pick_and_place_server::messages::simple_arm_server::MoveArm;
use pick_and_place_server::messages::turtlebot_block_manipulation::{
    PickAndPlaceActionFeedback, PickAndPlaceActionGoal, PickAndPlaceActionResult,
};
use pickplace_roslibrust::action::{outcome_status_id, PickAndPlaceServer};
use pickplace_roslibrust::transport::roslibrust::move_arm::RosbridgeMoveArm;

type Server = PickAndPlaceServer<RosbridgeMoveArm<MoveArm>>;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_args();

    let ros_server = ClientHandle::new(&config.bridge_url)
        .await
        .with_context(|| format!("connect to rosbridge at {}", config.bridge_url))?;
    let ros_backend = ClientHandle::new(&config.bridge_url)
        .await
        .with_context(|| format!("connect to rosbridge backend at {}", config.bridge_url))?;

    let client = Arc::new(RosbridgeMoveArm::<MoveArm>::new(
        ros_backend,
        config.move_service.clone(),
    ));
    let server: Arc<Server> = Arc::new(
        PickAndPlaceServer::new(config.action_name.clone(), client, config.server_options())
            .context("build pick_and_place server")?,
    );
    let topics = ActionTopics::for_action(&config.action_name);

    info!(
        "server started action={} bridge={} move_service={} call_timeout={:?}",
        config.action_name, config.bridge_url, config.move_service, config.call_timeout
    );

    let result_pub = Arc::new(
        ros_server
            .advertise::<PickAndPlaceActionResult>(&topics.result)
            .await
            .with_context(|| format!("advertise {}", topics.result))?,
    );
    let status_pub = Arc::new(
        ros_server
            .advertise::<GoalStatusArray>(&topics.status)
            .await
            .with_context(|| format!("advertise {}", topics.status))?,
    );
    let feedback_pub = ros_server
        .advertise::<PickAndPlaceActionFeedback>(&topics.feedback)
        .await
        .with_context(|| format!("advertise {}", topics.feedback))?;
    let goal_sub = ros_server
        .subscribe::<PickAndPlaceActionGoal>(&topics.goal)
        .await
        .with_context(|| format!("subscribe {}", topics.goal))?;
    let cancel_sub = ros_server
        .subscribe::<GoalID>(&topics.cancel)
        .await
        .with_context(|| format!("subscribe {}", topics.cancel))?;

    let active = Arc::new(ActiveRosGoal::new());

    let goal_server = Arc::clone(&server);
    let goal_active = Arc::clone(&active);
    let goal_status_pub = Arc::clone(&status_pub);
    tokio::spawn(async move {
        loop {
            let msg = goal_sub.next().await;
            let ros_id = msg.goal_id.clone();
            info!("goal received ros_id={:?} frame={}", ros_id.id, msg.goal.frame);

            // Accept in arrival order, before anything awaits.
            let accepted = goal_active.accept(&goal_server, &ros_id, goal_from_msg(&msg.goal));

            let server = Arc::clone(&goal_server);
            let active = Arc::clone(&goal_active);
            let result_pub = Arc::clone(&result_pub);
            let status_pub = Arc::clone(&goal_status_pub);
            tokio::spawn(async move {
                if let Err(err) = status_pub.publish(&active_status(&ros_id)).await {
                    warn!("status publish failed: {err}");
                }

                let goal_id = accepted.id();
                let outcome = server.run(accepted).await;
                active.release(goal_id);

                if let Err(err) = result_pub.publish(&result_msg(&ros_id, outcome)).await {
                    warn!("result publish failed: {err}");
                }
                let status = status_array(&ros_id, outcome_status_id(outcome));
                if let Err(err) = status_pub.publish(&status).await {
                    warn!("status publish failed: {err}");
                }
            });
        }
    });

    let cancel_server = Arc::clone(&server);
    let cancel_active = Arc::clone(&active);
    tokio::spawn(async move {
        loop {
            let msg = cancel_sub.next().await;
            if cancel_active.cancel(&cancel_server, &msg) {
                info!("preempt requested ros_id={:?}", msg.id);
            } else {
                debug!("cancel ros_id={:?} matched no active goal", msg.id);
            }
        }
    });

    let mut feedback = server.subscribe_feedback();
    let feedback_active = Arc::clone(&active);
    tokio::spawn(async move {
        loop {
            match feedback.recv().await {
                Ok(ev) => {
                    debug!("goal {} progress {:?}", ev.goal_id, ev.progress);
                    let Some(ros_id) = feedback_active.ros_id(ev.goal_id) else {
                        continue;
                    };
                    if let Err(err) = feedback_pub.publish(&feedback_msg(&ros_id)).await {
                        warn!("feedback publish failed: {err}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!("feedback lagged, skipped {skipped}"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let status_server = Arc::clone(&server);
    let status_active = Arc::clone(&active);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATUS_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let status = status_active.status(status_server.state());
            if let Err(err) = status_pub.publish(&status).await {
                warn!("status publish failed: {err}");
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("shutdown");
    Ok(())
}
