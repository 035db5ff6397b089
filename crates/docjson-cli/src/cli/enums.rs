use clap::ValueEnum;

/// Multi-variant text policy
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum VariantMergeMode {
    /// Concatenate every variant's text
    #[value(name = "concatenate")]
    Concatenate,

    /// Keep the first variant with non-empty text
    #[value(name = "first")]
    First,

    /// Join non-empty variant texts with `--separator`
    #[value(name = "join")]
    Join,
}

/// Member-name collision policy
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OverloadMode {
    /// Later members sharing a name replace earlier ones
    #[value(name = "last-wins")]
    LastWins,

    /// The n-th member sharing a name is keyed `name#n`
    #[value(name = "ordinal")]
    Ordinal,
}
