//! Partner Fixtures

use serde::Deserialize;

use crate::weekday::Day;

/// Wrapper for partners in YAML
#[derive(Debug, Deserialize)]
pub struct PartnersFixture {
    /// Partner pharmacies in directory order
    pub partners: Vec<PartnerFixture>,
}

/// Partner pharmacy fixture from YAML
#[derive(Debug, Deserialize)]
pub struct PartnerFixture {
    /// Pharmacy name
    pub name: String,

    /// Short description
    pub description: String,

    /// Opening days by weekday name
    pub open_days: Vec<Day>,

    /// Medicine keys in catalog display order
    pub catalog: Vec<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn partner_fixture_parses_weekday_names() -> TestResult {
        let yaml = "
partners:
  - name: Pharmacie du Soleil
    description: Weekend-only pharmacy
    open_days: [Saturday, Sunday]
    catalog: [calmoprax, somnidor]
";

        let fixture: PartnersFixture = serde_norway::from_str(yaml)?;
        let partner = fixture.partners.first().ok_or("expected one partner")?;

        assert_eq!(partner.open_days, vec![Day::Saturday, Day::Sunday]);
        assert_eq!(partner.catalog, vec!["calmoprax", "somnidor"]);

        Ok(())
    }

    #[test]
    fn partner_fixture_rejects_unknown_day_names() {
        let yaml = "
partners:
  - name: Nowhere
    description: none
    open_days: [Funday]
    catalog: []
";

        let result: Result<PartnersFixture, _> = serde_norway::from_str(yaml);

        assert!(result.is_err());
    }
}
