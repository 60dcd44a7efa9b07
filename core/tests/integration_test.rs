use fault_bridge_core_rs::{run_with_fault_capture, Fault};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct BoundsInfo {
  code: i64,
  info: String,
}

#[test]
fn no_op_yields_absence() {
  assert!(run_with_fault_capture(|| {}).is_none());
}

#[test]
fn divide_by_zero_message_is_returned() {
  let divide = |a: i32, b: i32| {
    if b == 0 {
      panic!("divide by zero");
    }
    a / b
  };
  let fault = run_with_fault_capture(|| {
    divide(1, 0);
  })
  .expect("fault");
  assert_eq!(fault.message(), "divide by zero");
}

#[test]
fn structured_payload_survives_the_bridge() {
  let fault = run_with_fault_capture(|| {
    Fault::new("BoundsError", "index out of bounds")
      .with_context("code", 42)
      .with_context("info", "bounds")
      .raise();
  })
  .expect("fault");

  let payload = fault.payload().expect("payload");
  assert_eq!(payload.get("code").and_then(|v| v.as_i64()), Some(42));
  assert_eq!(payload.get("info").and_then(|v| v.as_str()), Some("bounds"));
  assert_eq!(
    payload.decode::<BoundsInfo>().unwrap(),
    BoundsInfo {
      code: 42,
      info: "bounds".to_string()
    }
  );
}

#[tokio::test]
async fn task_fault_is_observed_through_its_join_handle() {
  let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
  let mut handle = None;

  let result = run_with_fault_capture(|| {
    handle = Some(tokio::spawn(async move {
      let _ = release_rx.await;
      panic!("late fault");
    }));
  });
  assert!(result.is_none());

  release_tx.send(()).unwrap();
  let join_error = handle.take().unwrap().await.expect_err("task should fault");
  assert!(join_error.is_panic());
}
