//! Integration tests for the user detail window.

mod common;

use common::{TestCtx, first_page, ok, second_page};
use kittest::Queryable;
use userdeck_business::SelectionState;

fn selection(ctx: &mut TestCtx<'_>) -> SelectionState {
    ctx.harness_mut()
        .state()
        .state
        .ctx
        .state::<SelectionState>()
        .clone()
}

#[tokio::test]
async fn row_click_opens_details_and_close_hides_them() {
    let mut ctx = TestCtx::new_app(vec![(1, ok(first_page())), (2, ok(second_page()))]).await;
    ctx.settle().await;
    assert!(!selection(&mut ctx).modal_open());

    ctx.harness_mut().get_by_label("Sincere@april.biz").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    let opened = selection(&mut ctx);
    assert!(opened.modal_open());
    assert_eq!(opened.selected_user().map(|u| u.id), Some(1));

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("User - Leanne Graham").is_some());
    assert!(harness.query_by_label("Gwenborough").is_some());
    assert!(harness.query_by_label("1-770-736-8031").is_some());

    harness.get_by_label("Close").click();
    harness.step();
    harness.step();

    let closed = selection(&mut ctx);
    assert!(!closed.modal_open());
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("User - Leanne Graham")
            .is_none()
    );
}
