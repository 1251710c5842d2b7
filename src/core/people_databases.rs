use crate::core::dork_builder::render_template;
use crate::core::models::{Person, SearchResult};
use crate::global_constants;

const PEOPLE_DATABASE_TEMPLATES: &[(&str, &str)] = &[
    ("Spokeo", "https://www.spokeo.com/{first}-{last}"),
    ("Whitepages", "https://www.whitepages.com/name/{first}-{last}"),
    (
        "TruePeopleSearch",
        "https://www.truepeoplesearch.com/results?name={first}%20{last}",
    ),
    (
        "FastPeopleSearch",
        "https://www.fastpeoplesearch.com/name/{first}-{last}",
    ),
    (
        "BeenVerified",
        "https://www.beenverified.com/people/{first}-{last}/",
    ),
];

/// Direct links into people-search sites. These are only recorded, never
/// requested, since the sites aggressively block scripted traffic.
pub fn people_database_results(person: &Person) -> Vec<SearchResult> {
    PEOPLE_DATABASE_TEMPLATES
        .iter()
        .map(|(site_name, template)| {
            let url = render_template(template, person);
            SearchResult::new(global_constants::PEOPLE_DATABASE_TAG, *site_name, url)
        })
        .collect()
}
