use super::*;

use futures::StreamExt;

use crate::animation::ops::{concat, delay, indefinite, merge};
use crate::animation::options::Curve;
use crate::view::headless::HeadlessView;

fn leaf_options(anim: &Anim<HeadlessView>) -> Vec<Option<AnimationOptions>> {
    match anim {
        Anim::Animate(leaf) => vec![leaf.options()],
        Anim::Concat(l, r) | Anim::Merge(l, r) => {
            let mut out = leaf_options(l);
            out.extend(leaf_options(r));
            out
        }
        Anim::Delay { inner, .. } | Anim::Indefinite(inner) => leaf_options(inner),
        Anim::Identity | Anim::Mutate(_) | Anim::Function(_) => Vec::new(),
    }
}

#[tokio::test]
async fn identity_emits_the_target_unchanged() {
    let view = HeadlessView::new("v");
    let out: Vec<HeadlessView> = Anim::identity()
        .animate(view.clone(), &Animator::immediate())
        .collect()
        .await;
    assert_eq!(out, vec![view.clone()]);
    assert!(view.changes().is_empty());
}

#[tokio::test]
async fn mutate_waits_for_the_first_poll() {
    let view = HeadlessView::new("v");
    let anim = Anim::mutate(|v: &HeadlessView| v.set_tag(5));
    let producer = anim.animate(view.clone(), &Animator::immediate());
    assert_eq!(view.tag(), 0);

    let out = producer.completion().await;
    assert_eq!(out, Some(view.clone()));
    assert_eq!(view.tag(), 5);
}

#[tokio::test]
async fn dropping_an_unpolled_producer_applies_nothing() {
    let view = HeadlessView::new("v");
    let anim = Anim::timed(Duration::ZERO, |v: &HeadlessView| v.set_tag(1));
    drop(anim.animate(view.clone(), &Animator::immediate()));
    assert!(view.changes().is_empty());
}

#[tokio::test]
async fn a_tree_can_run_many_times() {
    let bump = Anim::mutate(|v: &HeadlessView| v.set_tag(v.tag() + 1));
    let twice = concat(bump.clone(), bump);
    let animator = Animator::immediate();

    let a = HeadlessView::new("a");
    let b = HeadlessView::new("b");
    twice.animate(a.clone(), &animator).completion().await;
    twice.animate(a.clone(), &animator).completion().await;
    twice.animate(b.clone(), &animator).completion().await;

    assert_eq!(a.tag(), 4);
    assert_eq!(b.tag(), 2);
}

#[test]
fn with_options_reaches_every_timed_leaf() {
    let leaf = || Animate::<HeadlessView>::new(Duration::from_millis(10), |_| {});
    let tree = concat(
        leaf(),
        merge(
            delay(leaf(), Duration::from_millis(5)),
            indefinite(concat(leaf(), Anim::mutate(|_: &HeadlessView| {}))),
        ),
    );
    assert_eq!(leaf_options(&tree), vec![None, None, None]);

    let opts = AnimationOptions::default().with_curve(Curve::EaseOut);
    let tree = tree.with_options(opts);
    assert_eq!(leaf_options(&tree), vec![Some(opts); 3]);
}

#[test]
fn with_options_on_a_leaf_keeps_its_type() {
    let leaf: Animate<HeadlessView> = Animate::new(Duration::from_secs(2), |_| {})
        .with_options(AnimationOptions::linear());
    assert_eq!(leaf.options(), Some(AnimationOptions::linear()));
    assert_eq!(leaf.duration(), Duration::from_secs(2));
}

#[test]
fn default_is_identity() {
    assert!(matches!(Anim::<HeadlessView>::default(), Anim::Identity));
}
