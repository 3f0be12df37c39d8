/// Implement `Display` and `Debug` for a quantity alias.
///
/// `Display` honours an explicit precision (`{:.4}`) and falls back to the default one.
macro_rules! unit {
    ($name:ty, suffix: $suffix:literal, precision: $precision:literal) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let precision = f.precision().unwrap_or($precision);
                write!(f, "{:.*} {}", precision, self.0.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:?}{}", self.0.0, $suffix)
            }
        }
    };
}
