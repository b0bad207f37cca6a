//! Gap engine: merges a day's busy spans (plus the lunch break) and returns
//! the free spans left inside the working window.

use crate::models::interval::{MinuteSpan, WorkWindow};

/// Merge spans sorted by `(start, end)`. Touching spans (`start == prev.end`)
/// are merged too, so no zero-length hole is left between them.
pub fn merge_spans(mut spans: Vec<MinuteSpan>) -> Vec<MinuteSpan> {
    spans.sort_by_key(|s| (s.start, s.end));

    let mut merged: Vec<MinuteSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Free spans of `window` not covered by `busy` nor by the lunch break.
///
/// Output is sorted, pairwise disjoint, contained in the window and made of
/// strictly positive spans. Busy spans sticking out of the window are clipped
/// by the cursor walk, not truncated up front.
pub fn compute_gaps(busy: &[MinuteSpan], window: &WorkWindow) -> Vec<MinuteSpan> {
    // zero-length spans would split a free run into two touching gaps
    let mut spans: Vec<MinuteSpan> = busy.iter().copied().filter(|s| !s.is_empty()).collect();
    if let Some(lunch) = window.clipped_lunch() {
        spans.push(lunch);
    }

    let mut gaps = Vec::new();
    let mut cursor = window.start;

    for span in merge_spans(spans) {
        if span.start > cursor {
            gaps.push(MinuteSpan::new(cursor, span.start.min(window.end)));
        }
        cursor = cursor.max(span.end);
        if cursor >= window.end {
            break;
        }
    }

    if cursor < window.end {
        gaps.push(MinuteSpan::new(cursor, window.end));
    }

    gaps.retain(|g| !g.is_empty());
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn span(s: u32, e: u32) -> MinuteSpan {
        MinuteSpan::new(s, e)
    }

    fn nine_to_six(lunch: bool) -> WorkWindow {
        WorkWindow::new(540, 1080, lunch.then_some((720, 780))).unwrap()
    }

    #[test]
    fn empty_day_with_lunch_yields_morning_and_afternoon() {
        let gaps = compute_gaps(&[], &nine_to_six(true));
        assert_eq!(gaps, vec![span(540, 720), span(780, 1080)]);
    }

    #[test]
    fn empty_day_without_lunch_is_the_whole_window() {
        assert_eq!(compute_gaps(&[], &nine_to_six(false)), vec![span(540, 1080)]);
    }

    #[test]
    fn gaps_between_two_meetings() {
        let busy = [span(540, 600), span(660, 720)];
        let gaps = compute_gaps(&busy, &nine_to_six(false));
        assert_eq!(gaps, vec![span(600, 660), span(720, 1080)]);
    }

    #[test]
    fn touching_spans_merge_without_zero_gap() {
        assert_eq!(
            merge_spans(vec![span(600, 660), span(540, 600)]),
            vec![span(540, 660)]
        );

        let gaps = compute_gaps(&[span(540, 600), span(600, 660)], &nine_to_six(false));
        assert_eq!(gaps, vec![span(660, 1080)]);
    }

    #[test]
    fn span_equal_to_window_leaves_nothing() {
        assert!(compute_gaps(&[span(540, 1080)], &nine_to_six(true)).is_empty());
    }

    #[test]
    fn spans_outside_window_are_clipped_by_the_cursor() {
        let busy = [span(480, 570), span(1050, 1200), span(0, 30)];
        let gaps = compute_gaps(&busy, &nine_to_six(false));
        assert_eq!(gaps, vec![span(570, 1050)]);
    }

    #[test]
    fn span_after_window_does_not_leak_past_end() {
        let gaps = compute_gaps(&[span(1200, 1260)], &nine_to_six(false));
        assert_eq!(gaps, vec![span(540, 1080)]);
    }

    #[test]
    fn lunch_wider_than_window_is_clipped() {
        let window = WorkWindow::new(750, 900, Some((720, 780))).unwrap();
        assert_eq!(compute_gaps(&[], &window), vec![span(780, 900)]);
    }

    #[test]
    fn overlapping_and_unsorted_input() {
        let busy = [span(900, 960), span(560, 620), span(600, 700), span(930, 1000)];
        let gaps = compute_gaps(&busy, &nine_to_six(true));
        assert_eq!(
            gaps,
            vec![span(540, 560), span(700, 720), span(780, 900), span(1000, 1080)]
        );
    }

    #[test]
    fn zero_length_busy_span_is_harmless() {
        let gaps = compute_gaps(&[span(600, 600)], &nine_to_six(false));
        assert_eq!(gaps, vec![span(540, 1080)]);
    }

    #[test]
    fn empty_busy_span_inside_a_gap_leaves_it_whole() {
        let window = WorkWindow::new(243, 748, None).unwrap();
        let busy = [span(747, 747)];
        let gaps = compute_gaps(&busy, &window);

        assert_eq!(gaps, vec![span(243, 748)]);
        assert!(gaps.iter().all(|g| !busy[0].overlaps(g)));
    }

    fn busy_strategy() -> impl Strategy<Value = Vec<MinuteSpan>> {
        prop::collection::vec((0u32..1440, 0u32..240), 0..12).prop_map(|raw| {
            raw.into_iter()
                .map(|(s, len)| span(s, (s + len).min(1440)))
                .collect()
        })
    }

    fn window_strategy() -> impl Strategy<Value = WorkWindow> {
        (0u32..1200, 1u32..600, prop::option::of((0u32..1400, 1u32..120))).prop_map(
            |(s, len, lunch)| {
                let e = (s + len).min(1440);
                let lunch = lunch.map(|(ls, ll)| (ls, (ls + ll).min(1440)));
                WorkWindow::new(s, e, lunch).unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn gaps_are_sorted_disjoint_and_inside_window(
            busy in busy_strategy(),
            window in window_strategy(),
        ) {
            let gaps = compute_gaps(&busy, &window);

            for g in &gaps {
                prop_assert!(g.start < g.end);
                prop_assert!(window.span().contains(g));
            }
            for pair in gaps.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
        }

        #[test]
        fn gaps_never_overlap_busy_or_lunch(
            busy in busy_strategy(),
            window in window_strategy(),
        ) {
            let gaps = compute_gaps(&busy, &window);
            let lunch = window.clipped_lunch();

            for g in &gaps {
                prop_assert!(busy.iter().all(|b| !b.overlaps(g)));
                if let Some(l) = lunch {
                    prop_assert!(!l.overlaps(g));
                }
            }
        }

        #[test]
        fn gaps_and_busy_cover_the_window(
            busy in busy_strategy(),
            window in window_strategy(),
        ) {
            let gaps = compute_gaps(&busy, &window);
            let mut all = busy.clone();
            all.extend(window.clipped_lunch());
            all.extend(gaps.iter().copied());

            let covered = merge_spans(all);
            prop_assert!(covered.iter().any(|c| c.contains(&window.span())));
        }

        #[test]
        fn computing_twice_is_identical(
            busy in busy_strategy(),
            window in window_strategy(),
        ) {
            let mut reversed = busy.clone();
            reversed.reverse();

            let first = compute_gaps(&busy, &window);
            prop_assert_eq!(&first, &compute_gaps(&busy, &window));
            prop_assert_eq!(&first, &compute_gaps(&reversed, &window));
        }
    }
}
