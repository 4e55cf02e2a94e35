use crate::feed::DayKey;

/// Whether forward day navigation is allowed from `selected`.
///
/// Forward movement stops at the current day: the affordance disappears
/// entirely once `selected` reaches `today`, so the feed can never show a
/// future date. Backward navigation is unbounded.
pub fn can_go_forward(selected: DayKey, today: DayKey) -> bool {
    selected < today
}

/// Whether `selected` is the current day.
pub fn is_today(selected: DayKey, today: DayKey) -> bool {
    selected == today
}

/// Clamp a directly selected day to the allowed range.
///
/// Date entry is the one path that could otherwise land past `today`;
/// arrow navigation is already gated by [`can_go_forward`].
pub fn clamp_to_today(selected: DayKey, today: DayKey) -> DayKey {
    if selected > today {
        today
    } else {
        selected
    }
}
