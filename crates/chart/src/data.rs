use report_source::Aggregation;
use report_types::Color;

/// Segment colors, reused cyclically: red, yellow, green, blue.
pub const PALETTE: [Color; 4] = [
    Color::rgb(231, 76, 60),
    Color::rgb(241, 196, 15),
    Color::rgb(46, 204, 113),
    Color::rgb(52, 152, 219),
];

/// One labeled, colored slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSegment {
    pub label: String,
    pub value: usize,
    pub color: Color,
}

pub struct ChartDataBuilder;

impl ChartDataBuilder {
    /// Builds one segment per aggregation entry, in the aggregation's iteration order.
    /// The color of the segment at position `i` is `PALETTE[i % PALETTE.len()]`.
    pub fn build(aggregation: &Aggregation) -> Vec<ChartSegment> {
        aggregation
            .iter()
            .enumerate()
            .map(|(i, (label, value))| ChartSegment {
                label: label.to_string(),
                value,
                color: PALETTE[i % PALETTE.len()],
            })
            .collect()
    }
}
