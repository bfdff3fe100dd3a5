use crate::model::MonthlySummary;

/// Splits a bar of `width` cells into seven weekday segments.
///
/// The bar length is proportional to the month's weekday sum relative to
/// `max`. Segments get cells by largest remainder so they add up to the bar
/// length exactly, and any weekday with commits keeps at least one cell when
/// the bar has room for it.
pub fn segment_widths(summary: &MonthlySummary, max: u64, width: usize) -> [usize; 7] {
    let days = summary.weekdays();
    let sum: u64 = days.iter().sum();
    let mut widths = [0usize; 7];
    if sum == 0 || max == 0 || width == 0 {
        return widths;
    }

    let bar = ((sum as f64 / max as f64) * width as f64).round() as usize;
    let bar = bar.clamp(1, width);

    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(7);
    let mut used = 0;
    for (i, &count) in days.iter().enumerate() {
        let exact = count as f64 / sum as f64 * bar as f64;
        widths[i] = exact.floor() as usize;
        used += widths[i];
        remainders.push((i, exact - exact.floor()));
    }

    remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    for (i, _) in remainders.iter().take(bar - used) {
        widths[*i] += 1;
    }

    // Borrow a cell from the widest segment for any non-empty day that rounded to zero.
    for i in 0..7 {
        if days[i] > 0 && widths[i] == 0 {
            let (widest, &w) = widths
                .iter()
                .enumerate()
                .max_by_key(|&(_, &w)| w)
                .unwrap_or((0, &0));
            if w > 1 {
                widths[widest] -= 1;
                widths[i] = 1;
            }
        }
    }

    widths
}

/// Largest weekday sum across months, the scale for every bar.
pub fn max_weekday_sum(months: &[MonthlySummary]) -> u64 {
    months.iter().map(MonthlySummary::weekday_sum).max().unwrap_or(0)
}
