quantity!(Percentage, f64, "%", precision: 0);

impl Percentage {
    /// Convert the percentage into a plain ratio, so that `100%` becomes `1.0`.
    pub const fn to_ratio(self) -> f64 {
        self.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn to_ratio_ok() {
        assert_abs_diff_eq!(Percentage(95.0).to_ratio(), 0.95);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Percentage(60.0).to_string(), "60%");
        assert_eq!(format!("{:.1}", Percentage(88.5)), "88.5%");
    }

    #[test]
    fn parse_ok() {
        assert_eq!("12.5".parse::<Percentage>().unwrap(), Percentage(12.5));
    }
}
