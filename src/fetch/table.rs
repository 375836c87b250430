/// One kline row as the vendor reports it. Numeric cells the vendor leaves
/// blank or marks `-` are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorRow {
    pub date: String,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
    pub amount: Option<f64>,
    pub amplitude: Option<f64>,
    pub change_pct: Option<f64>,
    pub change: Option<f64>,
    pub turnover_rate: Option<f64>,
}

impl VendorRow {
    fn numeric_cells_mut(&mut self) -> [&mut Option<f64>; 10] {
        [
            &mut self.open,
            &mut self.close,
            &mut self.high,
            &mut self.low,
            &mut self.volume,
            &mut self.amount,
            &mut self.amplitude,
            &mut self.change_pct,
            &mut self.change,
            &mut self.turnover_rate,
        ]
    }
}

/// Tabular kline response, rows in the order the vendor sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorTable {
    pub code: Option<String>,
    pub name: Option<String>,
    pub rows: Vec<VendorRow>,
}

impl VendorTable {
    pub fn from_rows(rows: Vec<VendorRow>) -> Self {
        Self {
            code: None,
            name: None,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Replace every missing or NaN numeric cell with zero.
    pub fn fill_missing(&mut self) {
        for row in &mut self.rows {
            for cell in row.numeric_cells_mut() {
                match cell {
                    Some(value) if !value.is_nan() => {}
                    _ => *cell = Some(0.0),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_missing_zeroes_gaps_and_nans() {
        let mut table = VendorTable::from_rows(vec![VendorRow {
            date: "2023-01-03".to_string(),
            open: Some(10.0),
            close: Some(f64::NAN),
            volume: None,
            ..VendorRow::default()
        }]);

        table.fill_missing();

        let row = &table.rows[0];
        assert_eq!(row.open, Some(10.0));
        assert_eq!(row.close, Some(0.0));
        assert_eq!(row.volume, Some(0.0));
        assert_eq!(row.turnover_rate, Some(0.0));
        assert_eq!(row.date, "2023-01-03");
    }
}
