use crate::core::models::Person;
use crate::global_constants;

const BASELINE_DORK_TEMPLATES: &[&str] = &[
    // name variants
    r#""{first} {last}""#,
    r#""{last}, {first}""#,
    r#""{first} * {last}""#,
    // social media
    r#""{first} {last}" site:facebook.com OR site:linkedin.com OR site:instagram.com OR site:twitter.com"#,
    r#""{first} {last}" inurl:profile OR inurl:about OR inurl:bio"#,
    // contact
    r#""{first} {last}" intext:address OR intext:phone OR intext:email OR intext:contact"#,
    // location
    r#""{first} {last}" intext:city OR intext:state OR intext:country OR intext:moved"#,
    // public records
    r#""{first} {last}" intext:court OR intext:property OR intext:marriage OR filetype:pdf"#,
    // digital footprint
    r#""{first} {last}" site:github.com OR site:medium.com OR site:wordpress.com OR inurl:author"#,
];

const ADVANCED_DORK_TEMPLATES: &[&str] = &[
    // phone and contact details
    r#""{first} {last}" intext:phone filetype:xlsx OR filetype:csv"#,
    r#""{first} {last}" intext:"contact information" OR intext:"emergency contact""#,
    r#""{first} {last}" intext:resume phone"#,
    r#"site:truecaller.com OR site:whitepages.com OR site:spokeo.com "{first} {last}""#,
    // medical and welfare
    r#""{first} {last}" intext:patient OR intext:medical OR intext:hospital -doctor"#,
    r#""{first} {last}" intext:insurance OR intext:policy"#,
    r#""{first} {last}" intext:welfare OR intext:benefits OR intext:assistance"#,
    // financial traces
    r#""{first} {last}" intext:bank OR intext:account OR intext:transaction"#,
    r#""{first} {last}" intext:paypal OR intext:venmo OR intext:cashapp"#,
    r#""{first} {last}" intext:loan OR intext:mortgage OR intext:credit"#,
    // prison, legal and police
    r#""{first} {last}" site:vinelink.com"#,
    r#""{first} {last}" intext:inmate OR intext:prisoner OR intext:corrections"#,
    r#""{first} {last}" site:mugshots.com OR site:arrests.org"#,
    // education and employment
    r#""{first} {last}" site:.edu intext:student OR intext:alumni"#,
    r#""{first} {last}" filetype:pdf intext:transcript OR intext:diploma"#,
    r#""{first} {last}" site:linkedin.com AND (inurl:in/ OR inurl:pub/)"#,
    // historical archives
    r#""{first} {last}" site:archive.org"#,
    r#""{first} {last}" site:newspapers.com OR site:legacy.com"#,
    r#""{first} {last}" filetype:pdf intext:yearbook"#,
    // forums and communities
    r#""{first} {last}" site:reddit.com OR site:quora.com"#,
    r#""{first} {last}" intext:username OR intext:profile site:forum.*"#,
    // travel
    r#""{first} {last}" intext:flight OR intext:booking OR intext:reservation"#,
    r#""{first} {last}" intext:passport OR intext:visa OR intext:travel"#,
    // file types and metadata
    r#""{first} {last}" ext:vcf OR ext:vcard"#,
    r#""{first} {last}" intext:"IP address" OR intext:WHOIS"#,
    r#""{first} {last}" site:findagrave.com OR site:cemetery"#,
];

pub const BASELINE_DORK_COUNT: usize = BASELINE_DORK_TEMPLATES.len();
pub const ADVANCED_DORK_COUNT: usize = ADVANCED_DORK_TEMPLATES.len();

/// Builds the ordered list of dorks for `person`. The baseline set always comes
/// first; `advanced` appends the specialised set after it.
pub fn generate_dorks(person: &Person, advanced: bool) -> Vec<String> {
    let capacity = if advanced {
        BASELINE_DORK_COUNT + ADVANCED_DORK_COUNT
    } else {
        BASELINE_DORK_COUNT
    };
    let mut templates: Vec<&str> = Vec::with_capacity(capacity);
    templates.extend_from_slice(BASELINE_DORK_TEMPLATES);
    if advanced {
        templates.extend_from_slice(ADVANCED_DORK_TEMPLATES);
    }

    let dorks: Vec<String> = templates
        .into_iter()
        .map(|template| render_template(template, person))
        .collect();

    log::debug!(
        "{} Generated {} dorks for {} (advanced={})",
        global_constants::LOG_TAG_DORKS,
        dorks.len(),
        person.full_name(),
        advanced
    );

    dorks
}

// Single pass, so braces that appear inside a name are copied through untouched.
pub(crate) fn render_template(template: &str, person: &Person) -> String {
    let mut rendered = String::with_capacity(template.len() + 32);
    let mut remaining = template;

    while let Some(open_index) = remaining.find('{') {
        rendered.push_str(&remaining[..open_index]);
        let placeholder_start = &remaining[open_index..];

        let Some(close_index) = placeholder_start.find('}') else {
            rendered.push_str(placeholder_start);
            return rendered;
        };

        match &placeholder_start[1..close_index] {
            "first" => rendered.push_str(&person.first_name),
            "last" => rendered.push_str(&person.last_name),
            _ => rendered.push_str(&placeholder_start[..=close_index]),
        }
        remaining = &placeholder_start[close_index + 1..];
    }

    rendered.push_str(remaining);
    rendered
}
