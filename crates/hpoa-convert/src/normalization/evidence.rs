use hpoa_model::EvidenceCode;

/// Parses one evidence column. Anything outside the closed code set is `None`.
pub fn parse_evidence_code(raw: &str) -> Option<EvidenceCode> {
    raw.parse().ok()
}
