use super::*;

use crate::animation::anim::Anim;
use crate::animation::options::AnimationOptions;
use crate::foundation::core::Point;
use crate::foundation::error::ReanimateError;
use crate::runtime::animator::Animator;
use crate::view::headless::HeadlessView;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

#[tokio::test]
async fn timed_presets_write_their_property() {
    let view = HeadlessView::new("v");
    let steps: Vec<Anim<HeadlessView>> = vec![
        alpha(0.3, Duration::from_millis(10)).into(),
        rotate(0.5, Duration::ZERO).into(),
        scale(2.0, 3.0, Duration::ZERO).into(),
        translate(4.0, 5.0, Duration::ZERO).into(),
        set_hidden(true).into(),
        remove_all_animations().into(),
    ];
    Animator::immediate().run(view.clone(), steps).await.unwrap();

    assert_eq!(view.alpha(), 0.3);
    assert!(view.is_hidden());
    assert_eq!(
        view.transforms(),
        vec![
            Affine::rotate(0.5),
            Affine::scale_non_uniform(2.0, 3.0),
            Affine::translate((4.0, 5.0)),
        ]
    );
}

#[tokio::test]
async fn move_by_is_relative_to_the_current_center() {
    let view = HeadlessView::new("v").at(Point::new(10.0, 10.0));
    let step = move_by::<HeadlessView>(5.0, -2.0, Duration::ZERO);
    Animator::immediate()
        .run(view.clone(), [step.clone(), step])
        .await
        .unwrap();
    assert_eq!(
        view.centers(),
        vec![Point::new(15.0, 8.0), Point::new(20.0, 6.0)]
    );
}

#[tokio::test]
async fn move_fn_accumulates_offsets() {
    let view = HeadlessView::new("v");
    let anim = move_fn::<HeadlessView>(0.1, 0.03, |t| (t, t)).unwrap();
    Animator::immediate().run(view.clone(), [anim]).await.unwrap();

    let xs: Vec<f64> = view.centers().iter().map(|p| p.x).collect();
    assert_close(&xs, &[0.0, 0.03, 0.09, 0.18, 0.28]);
}

#[tokio::test]
async fn move_fn_on_exact_multiple_has_no_tail() {
    let view = HeadlessView::new("v");
    let anim = move_fn::<HeadlessView>(0.02, 0.01, |t| (t, t)).unwrap();
    Animator::immediate().run(view.clone(), [anim]).await.unwrap();

    let ys: Vec<f64> = view.centers().iter().map(|p| p.y).collect();
    assert_close(&ys, &[0.0, 0.01, 0.03]);
}

#[tokio::test]
async fn alpha_and_scale_fn_sample_with_tail() {
    let view = HeadlessView::new("v");
    let fade = alpha_fn::<HeadlessView>(0.1, 0.03, |t| t).unwrap();
    let grow = scale_fn::<HeadlessView>(0.1, 0.03, |t| (t, t)).unwrap();
    let steps: Vec<Anim<HeadlessView>> = vec![fade.into(), grow.into()];
    Animator::immediate().run(view.clone(), steps).await.unwrap();

    let expected = [0.0, 0.03, 0.06, 0.09, 0.1];
    assert_close(&view.alphas(), &expected);
    let sx: Vec<f64> = view.transforms().iter().map(|t| t.as_coeffs()[0]).collect();
    assert_close(&sx, &expected);
}

#[tokio::test]
async fn rotate_and_translate_fn_drive_the_transform() {
    let view = HeadlessView::new("v");
    let spin = rotate_fn::<HeadlessView>(0.02, 0.01, |t| t * 10.0).unwrap();
    let slide = translate_fn::<HeadlessView>(0.02, 0.01, |t| (t, 0.0)).unwrap();
    let steps: Vec<Anim<HeadlessView>> = vec![spin.into(), slide.into()];
    Animator::immediate().run(view.clone(), steps).await.unwrap();

    let transforms = view.transforms();
    assert_eq!(transforms.len(), 6);
    assert_close(&transforms[1].as_coeffs(), &Affine::rotate(0.1).as_coeffs());
    assert_close(&[transforms[5].translation().x], &[0.02]);
}

#[test]
fn function_presets_reject_bad_timing() {
    let err = alpha_fn::<HeadlessView>(1.0, 0.0, |t| t).unwrap_err();
    assert!(matches!(err, ReanimateError::Validation(_)));
    let err = move_fn::<HeadlessView>(-1.0, 0.1, |t| (t, t)).unwrap_err();
    assert!(matches!(err, ReanimateError::Validation(_)));
}

#[test]
fn timed_presets_accept_options() {
    let leaf = alpha::<HeadlessView>(1.0, Duration::from_secs(1))
        .with_options(AnimationOptions::linear());
    assert_eq!(leaf.options(), Some(AnimationOptions::linear()));
    assert_eq!(leaf.duration(), Duration::from_secs(1));
}
