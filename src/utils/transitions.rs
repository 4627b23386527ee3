use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, TransitionGoal};

use crate::ElementIdExt;

/// Keyed transition towards a goal picked from a list of conditions.
///
/// ```ignore
/// conditional_transition!(id, window, cx, Duration::from_millis(250), {
///     is_focus => focus_color,
///     is_hover => hover_color,
///     _ => color
/// })
/// ```
///
/// A single expression may be given instead of a branch list.
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        let goal = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        $crate::utils::goal_transition($id, $window, $cx, $duration, goal)
    }};
}

#[macro_export]
macro_rules! conditional_transition_branches {
    (@condition [ { $($branches:tt)+ } ]) => {
        $crate::conditional_transition_branches!(@branch $($branches)+)
    };

    (@condition [ $value:expr ]) => {
        $value
    };

    (@branch _ => $value:expr $(,)?) => {
        $value
    };

    (@branch $cond:expr => $value:expr, $($rest:tt)+) => {
        if $cond {
            $value
        } else {
            $crate::conditional_transition_branches!(@branch $($rest)+)
        }
    };

    (@branch $cond:expr => $value:expr $(,)?) => {
        compile_error!("the last branch must be `_ => value`")
    };
}

/// Returns the keyed transition for `id`, retargeted at `goal`.
///
/// The owning entity is notified when the goal changes so the next frame
/// starts animating.
pub fn goal_transition<T>(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    goal: T,
) -> Transition<T>
where
    T: TransitionGoal + Clone + PartialEq + 'static,
{
    let initial_goal = goal.clone();
    let transition = Transition::new(id, window, cx, duration, move |_window, _cx| {
        initial_goal.clone()
    })
    .with_easing(ease_out_quint());

    if transition.set(cx, goal) {
        cx.notify(transition.entity_id());
    }

    transition
}

pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        {
            is_disabled => 0.45,
            _ => 1.
        }
    )
}

/// Transition from 0 (unchecked) to 1 (checked).
pub fn checked_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_checked: bool,
) -> Transition<f32> {
    goal_transition(
        base_id.into().with_suffix("state:checked"),
        window,
        cx,
        duration,
        is_checked as u8 as f32,
    )
}
