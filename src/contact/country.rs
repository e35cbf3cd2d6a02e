use crate::config::DEFAULT_COUNTRY_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+1", country: "United States" },
    CountryCode { code: "+7", country: "Russia" },
    CountryCode { code: "+20", country: "Egypt" },
    CountryCode { code: "+27", country: "South Africa" },
    CountryCode { code: "+30", country: "Greece" },
    CountryCode { code: "+31", country: "Netherlands" },
    CountryCode { code: "+32", country: "Belgium" },
    CountryCode { code: "+33", country: "France" },
    CountryCode { code: "+34", country: "Spain" },
    CountryCode { code: "+36", country: "Hungary" },
    CountryCode { code: "+39", country: "Italy" },
    CountryCode { code: "+40", country: "Romania" },
    CountryCode { code: "+41", country: "Switzerland" },
    CountryCode { code: "+43", country: "Austria" },
    CountryCode { code: "+44", country: "United Kingdom" },
    CountryCode { code: "+45", country: "Denmark" },
    CountryCode { code: "+46", country: "Sweden" },
    CountryCode { code: "+47", country: "Norway" },
    CountryCode { code: "+48", country: "Poland" },
    CountryCode { code: "+49", country: "Germany" },
    CountryCode { code: "+51", country: "Peru" },
    CountryCode { code: "+52", country: "Mexico" },
    CountryCode { code: "+54", country: "Argentina" },
    CountryCode { code: "+55", country: "Brazil" },
    CountryCode { code: "+56", country: "Chile" },
    CountryCode { code: "+57", country: "Colombia" },
    CountryCode { code: "+58", country: "Venezuela" },
    CountryCode { code: "+60", country: "Malaysia" },
    CountryCode { code: "+61", country: "Australia" },
    CountryCode { code: "+62", country: "Indonesia" },
    CountryCode { code: "+63", country: "Philippines" },
    CountryCode { code: "+64", country: "New Zealand" },
    CountryCode { code: "+65", country: "Singapore" },
    CountryCode { code: "+66", country: "Thailand" },
    CountryCode { code: "+81", country: "Japan" },
    CountryCode { code: "+82", country: "South Korea" },
    CountryCode { code: "+84", country: "Vietnam" },
    CountryCode { code: "+86", country: "China" },
    CountryCode { code: "+90", country: "Turkey" },
    CountryCode { code: "+91", country: "India" },
    CountryCode { code: "+92", country: "Pakistan" },
    CountryCode { code: "+93", country: "Afghanistan" },
    CountryCode { code: "+94", country: "Sri Lanka" },
    CountryCode { code: "+95", country: "Myanmar" },
    CountryCode { code: "+98", country: "Iran" },
    CountryCode { code: "+212", country: "Morocco" },
    CountryCode { code: "+213", country: "Algeria" },
    CountryCode { code: "+216", country: "Tunisia" },
    CountryCode { code: "+218", country: "Libya" },
    CountryCode { code: "+220", country: "Gambia" },
    CountryCode { code: "+221", country: "Senegal" },
    CountryCode { code: "+222", country: "Mauritania" },
    CountryCode { code: "+223", country: "Mali" },
    CountryCode { code: "+224", country: "Guinea" },
    CountryCode { code: "+225", country: "Ivory Coast" },
    CountryCode { code: "+226", country: "Burkina Faso" },
    CountryCode { code: "+227", country: "Niger" },
    CountryCode { code: "+228", country: "Togo" },
    CountryCode { code: "+229", country: "Benin" },
    CountryCode { code: "+234", country: "Nigeria" },
    CountryCode { code: "+235", country: "Chad" },
    CountryCode { code: "+236", country: "Central African Republic" },
    CountryCode { code: "+237", country: "Cameroon" },
    CountryCode { code: "+238", country: "Cape Verde" },
    CountryCode { code: "+240", country: "Equatorial Guinea" },
    CountryCode { code: "+241", country: "Gabon" },
    CountryCode { code: "+242", country: "Congo" },
    CountryCode { code: "+243", country: "Democratic Republic of the Congo" },
    CountryCode { code: "+244", country: "Angola" },
    CountryCode { code: "+245", country: "Guinea-Bissau" },
    CountryCode { code: "+248", country: "Seychelles" },
    CountryCode { code: "+249", country: "Sudan" },
    CountryCode { code: "+250", country: "Rwanda" },
    CountryCode { code: "+251", country: "Ethiopia" },
    CountryCode { code: "+252", country: "Somalia" },
    CountryCode { code: "+253", country: "Djibouti" },
    CountryCode { code: "+254", country: "Kenya" },
    CountryCode { code: "+255", country: "Tanzania" },
    CountryCode { code: "+256", country: "Uganda" },
    CountryCode { code: "+257", country: "Burundi" },
    CountryCode { code: "+258", country: "Mozambique" },
    CountryCode { code: "+260", country: "Zambia" },
    CountryCode { code: "+261", country: "Madagascar" },
    CountryCode { code: "+263", country: "Zimbabwe" },
    CountryCode { code: "+264", country: "Namibia" },
    CountryCode { code: "+265", country: "Malawi" },
    CountryCode { code: "+266", country: "Lesotho" },
    CountryCode { code: "+267", country: "Botswana" },
    CountryCode { code: "+268", country: "Swaziland" },
    CountryCode { code: "+269", country: "Comoros" },
    CountryCode { code: "+290", country: "Saint Helena" },
    CountryCode { code: "+291", country: "Eritrea" },
    CountryCode { code: "+297", country: "Aruba" },
    CountryCode { code: "+298", country: "Faroe Islands" },
    CountryCode { code: "+299", country: "Greenland" },
    CountryCode { code: "+350", country: "Gibraltar" },
    CountryCode { code: "+351", country: "Portugal" },
    CountryCode { code: "+352", country: "Luxembourg" },
    CountryCode { code: "+353", country: "Ireland" },
    CountryCode { code: "+354", country: "Iceland" },
    CountryCode { code: "+355", country: "Albania" },
    CountryCode { code: "+356", country: "Malta" },
    CountryCode { code: "+357", country: "Cyprus" },
    CountryCode { code: "+358", country: "Finland" },
    CountryCode { code: "+359", country: "Bulgaria" },
    CountryCode { code: "+370", country: "Lithuania" },
    CountryCode { code: "+371", country: "Latvia" },
    CountryCode { code: "+372", country: "Estonia" },
    CountryCode { code: "+373", country: "Moldova" },
    CountryCode { code: "+374", country: "Armenia" },
    CountryCode { code: "+375", country: "Belarus" },
    CountryCode { code: "+376", country: "Andorra" },
    CountryCode { code: "+377", country: "Monaco" },
    CountryCode { code: "+378", country: "San Marino" },
    CountryCode { code: "+380", country: "Ukraine" },
    CountryCode { code: "+381", country: "Serbia" },
    CountryCode { code: "+382", country: "Montenegro" },
    CountryCode { code: "+385", country: "Croatia" },
    CountryCode { code: "+386", country: "Slovenia" },
    CountryCode { code: "+387", country: "Bosnia and Herzegovina" },
    CountryCode { code: "+389", country: "Macedonia" },
    CountryCode { code: "+420", country: "Czech Republic" },
    CountryCode { code: "+421", country: "Slovakia" },
    CountryCode { code: "+423", country: "Liechtenstein" },
    CountryCode { code: "+500", country: "Falkland Islands" },
    CountryCode { code: "+501", country: "Belize" },
    CountryCode { code: "+502", country: "Guatemala" },
    CountryCode { code: "+503", country: "El Salvador" },
    CountryCode { code: "+504", country: "Honduras" },
    CountryCode { code: "+505", country: "Nicaragua" },
    CountryCode { code: "+506", country: "Costa Rica" },
    CountryCode { code: "+507", country: "Panama" },
    CountryCode { code: "+509", country: "Haiti" },
    CountryCode { code: "+590", country: "Guadeloupe" },
    CountryCode { code: "+591", country: "Bolivia" },
    CountryCode { code: "+592", country: "Guyana" },
    CountryCode { code: "+593", country: "Ecuador" },
    CountryCode { code: "+595", country: "Paraguay" },
    CountryCode { code: "+597", country: "Suriname" },
    CountryCode { code: "+598", country: "Uruguay" },
    CountryCode { code: "+599", country: "Netherlands Antilles" },
    CountryCode { code: "+670", country: "East Timor" },
    CountryCode { code: "+673", country: "Brunei" },
    CountryCode { code: "+674", country: "Nauru" },
    CountryCode { code: "+675", country: "Papua New Guinea" },
    CountryCode { code: "+676", country: "Tonga" },
    CountryCode { code: "+677", country: "Solomon Islands" },
    CountryCode { code: "+678", country: "Vanuatu" },
    CountryCode { code: "+679", country: "Fiji" },
    CountryCode { code: "+680", country: "Palau" },
    CountryCode { code: "+681", country: "Wallis and Futuna" },
    CountryCode { code: "+682", country: "Cook Islands" },
    CountryCode { code: "+683", country: "Niue" },
    CountryCode { code: "+685", country: "Samoa" },
    CountryCode { code: "+686", country: "Kiribati" },
    CountryCode { code: "+687", country: "New Caledonia" },
    CountryCode { code: "+688", country: "Tuvalu" },
    CountryCode { code: "+689", country: "French Polynesia" },
    CountryCode { code: "+690", country: "Tokelau" },
    CountryCode { code: "+691", country: "Micronesia" },
    CountryCode { code: "+692", country: "Marshall Islands" },
    CountryCode { code: "+850", country: "North Korea" },
    CountryCode { code: "+852", country: "Hong Kong" },
    CountryCode { code: "+853", country: "Macau" },
    CountryCode { code: "+855", country: "Cambodia" },
    CountryCode { code: "+856", country: "Laos" },
    CountryCode { code: "+880", country: "Bangladesh" },
    CountryCode { code: "+886", country: "Taiwan" },
    CountryCode { code: "+960", country: "Maldives" },
    CountryCode { code: "+961", country: "Lebanon" },
    CountryCode { code: "+962", country: "Jordan" },
    CountryCode { code: "+963", country: "Syria" },
    CountryCode { code: "+964", country: "Iraq" },
    CountryCode { code: "+965", country: "Kuwait" },
    CountryCode { code: "+966", country: "Saudi Arabia" },
    CountryCode { code: "+967", country: "Yemen" },
    CountryCode { code: "+968", country: "Oman" },
    CountryCode { code: "+970", country: "Palestinian Territory" },
    CountryCode { code: "+971", country: "United Arab Emirates" },
    CountryCode { code: "+972", country: "Israel" },
    CountryCode { code: "+973", country: "Bahrain" },
    CountryCode { code: "+974", country: "Qatar" },
    CountryCode { code: "+975", country: "Bhutan" },
    CountryCode { code: "+976", country: "Mongolia" },
    CountryCode { code: "+977", country: "Nepal" },
    CountryCode { code: "+992", country: "Tajikistan" },
    CountryCode { code: "+993", country: "Turkmenistan" },
    CountryCode { code: "+994", country: "Azerbaijan" },
    CountryCode { code: "+995", country: "Georgia" },
    CountryCode { code: "+996", country: "Kyrgyzstan" },
    CountryCode { code: "+998", country: "Uzbekistan" },
];

pub fn is_known(code: &str) -> bool {
    COUNTRY_CODES.iter().any(|c| c.code == code)
}

pub fn default_code() -> &'static str {
    DEFAULT_COUNTRY_CODE
}

/// Matches the country name case-insensitively, or the dialing code as typed.
/// An empty query returns the whole table.
pub fn search_country_codes(query: &str) -> Vec<&'static CountryCode> {
    if query.is_empty() {
        return COUNTRY_CODES.iter().collect();
    }
    let needle = query.to_lowercase();
    COUNTRY_CODES
        .iter()
        .filter(|c| c.country.to_lowercase().contains(&needle) || c.code.contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_is_in_the_table() {
        assert!(is_known(default_code()));
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = COUNTRY_CODES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search_country_codes("").len(), COUNTRY_CODES.len());
    }

    #[test]
    fn search_by_name_ignores_case() {
        let hits = search_country_codes("inDIA");
        assert!(hits.iter().any(|c| c.code == "+91"));
    }

    #[test]
    fn search_by_code_prefix() {
        let hits = search_country_codes("+35");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|c| c.code.contains("+35")));
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search_country_codes("atlantis").is_empty());
    }
}
