use super::*;

use futures::StreamExt;
use tokio::time::Instant;

use crate::view::headless::HeadlessView;

fn tag(n: i64) -> Mutate<HeadlessView> {
    Mutate::new(move |v: &HeadlessView| v.set_tag(n))
}

fn bump() -> Mutate<HeadlessView> {
    Mutate::new(|v: &HeadlessView| v.set_tag(v.tag() + 1))
}

fn wait(ms: u64) -> Animate<HeadlessView> {
    Animate::new(Duration::from_millis(ms), |_| {})
}

#[tokio::test]
async fn concat_runs_left_then_right() {
    let view = HeadlessView::new("v");
    concat(tag(1), tag(2))
        .animate(view.clone(), &Animator::immediate())
        .completion()
        .await;
    assert_eq!(view.tags(), vec![1, 2]);
}

#[tokio::test]
async fn operators_build_the_same_trees() {
    let view = HeadlessView::new("v");
    let anim = tag(1) + (tag(2) & tag(3)) + tag(4);
    assert!(matches!(anim, Anim::Concat(..)));
    anim.animate(view.clone(), &Animator::immediate())
        .completion()
        .await;

    let tags = view.tags();
    assert_eq!(tags.first(), Some(&1));
    assert_eq!(tags.last(), Some(&4));
    assert_eq!(tags.len(), 4);
}

#[tokio::test]
async fn merge_emits_the_target_once() {
    let view = HeadlessView::new("v");
    let out: Vec<HeadlessView> = merge(tag(1), tag(2))
        .animate(view.clone(), &Animator::immediate())
        .collect()
        .await;
    assert_eq!(out, vec![view.clone()]);

    let mut tags = view.tags();
    tags.sort_unstable();
    assert_eq!(tags, vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn merge_waits_for_the_slower_branch() {
    let start = Instant::now();
    merge(wait(30), wait(50))
        .animate(HeadlessView::new("v"), &Animator::timer())
        .completion()
        .await;
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert!(start.elapsed() < Duration::from_millis(80));
}

#[tokio::test(start_paused = true)]
async fn concat_durations_add_up() {
    let start = Instant::now();
    concat(wait(30), wait(50))
        .animate(HeadlessView::new("v"), &Animator::timer())
        .completion()
        .await;
    assert!(start.elapsed() >= Duration::from_millis(80));
}

#[tokio::test(start_paused = true)]
async fn delay_holds_the_inner_animation_back() {
    let view = HeadlessView::new("v");
    let producer = delay(tag(9), Duration::from_millis(50)).animate(view.clone(), &Animator::timer());
    let run = tokio::spawn(producer.completion());

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(view.tag(), 0);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(view.tag(), 9);

    assert_eq!(run.await.unwrap(), Some(view));
}

#[tokio::test]
async fn indefinite_emits_once_per_iteration() {
    let view = HeadlessView::new("v");
    let out: Vec<HeadlessView> = indefinite(bump())
        .animate(view.clone(), &Animator::immediate())
        .take(3)
        .collect()
        .await;
    assert_eq!(out.len(), 3);
    assert_eq!(view.tag(), 3);
}

#[tokio::test]
async fn dropping_an_indefinite_producer_stops_it() {
    let view = HeadlessView::new("v");
    let mut producer = indefinite(bump()).animate(view.clone(), &Animator::immediate());
    producer.next().await;
    producer.next().await;
    drop(producer);

    tokio::task::yield_now().await;
    assert_eq!(view.tag(), 2);
}

#[test]
fn ext_methods_pick_the_matching_combinator() {
    assert!(matches!(tag(1).followed_by(tag(2)), Anim::Concat(..)));
    assert!(matches!(tag(1).simultaneously(tag(2)), Anim::Merge(..)));
    assert!(matches!(
        tag(1).delayed_by(Duration::from_millis(3)),
        Anim::Delay { by, .. } if by == Duration::from_millis(3)
    ));
    assert!(matches!(tag(1).indefinite(), Anim::Indefinite(_)));
    assert!(matches!(wait(1) & wait(2), Anim::Merge(..)));
}
