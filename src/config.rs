use crate::spring::EdgePolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionMode {
    #[default]
    Spring,
    Teleport,
}

/// Page-level switches read from the URL query string, e.g.
/// `?mode=teleport&edges=bounce&seed=7`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub mode: MotionMode,
    pub edges: EdgePolicy,
    pub seed: Option<u64>,
}

impl PageConfig {
    /// Parse `location.search`; a leading `?` is optional. Unknown keys are
    /// ignored and bad values fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "mode" => match parse_mode(value) {
                    Some(m) => cfg.mode = m,
                    None => log::warn!("[config] unknown mode {:?}, using {:?}", value, cfg.mode),
                },
                "edges" => match parse_edges(value) {
                    Some(e) => cfg.edges = e,
                    None => {
                        log::warn!("[config] unknown edges {:?}, using {:?}", value, cfg.edges)
                    }
                },
                "seed" => match value.parse::<u64>() {
                    Ok(s) => cfg.seed = Some(s),
                    Err(_) => log::warn!("[config] ignoring seed {:?}", value),
                },
                _ => {}
            }
        }
        cfg
    }
}

#[inline]
pub fn parse_mode(value: &str) -> Option<MotionMode> {
    match value.to_ascii_lowercase().as_str() {
        "spring" | "elastic" => Some(MotionMode::Spring),
        "teleport" | "jump" => Some(MotionMode::Teleport),
        _ => None,
    }
}

#[inline]
pub fn parse_edges(value: &str) -> Option<EdgePolicy> {
    match value.to_ascii_lowercase().as_str() {
        "soft" | "stop" => Some(EdgePolicy::SoftStop),
        "bounce" => Some(EdgePolicy::Bounce),
        _ => None,
    }
}
