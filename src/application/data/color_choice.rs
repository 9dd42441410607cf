use clap::ValueEnum;
use supports_color::Stream;

/// When to color directory names in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Follow the profile, or detect terminal support when it is silent
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self, profile_preference: Option<bool>) -> bool {
        match (self, profile_preference) {
            (ColorChoice::Always, _) => true,
            (ColorChoice::Never, _) => false,
            (ColorChoice::Auto, Some(enabled)) => enabled,
            (ColorChoice::Auto, None) => supports_color::on(Stream::Stdout).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(ColorChoice::Always, None, true)]
    #[case(ColorChoice::Always, Some(false), true)]
    #[case(ColorChoice::Never, Some(true), false)]
    #[case(ColorChoice::Auto, Some(true), true)]
    #[case(ColorChoice::Auto, Some(false), false)]
    fn explicit_choices_win(
        #[case] choice: ColorChoice,
        #[case] preference: Option<bool>,
        #[case] expected: bool,
    ) {
        assert_eq!(choice.resolve(preference), expected);
    }
}
