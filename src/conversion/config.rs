/// How octet and integer text is turned into numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsePolicy {
    /// `atoi` semantics: garbage reads as 0, out-of-range octets are packed
    /// unguarded and overlap their neighbours.
    Compatible,
    /// Plain decimal only, octets limited to [0, 255].
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionConfig {
    pub parse_policy: ParsePolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::Compatible,
        }
    }
}

impl ConversionConfig {
    pub fn new(parse_policy: ParsePolicy) -> Self {
        Self { parse_policy }
    }

    pub fn strict() -> Self {
        Self::new(ParsePolicy::Strict)
    }
}
