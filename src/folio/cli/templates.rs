//! Output templates.
//!
//! Templates are minijinja and name only semantic styles through the `style`
//! filter. Line breaks are explicit: block tags are chained on one line so the
//! only newlines in the output are the ones written inside a block.
//!
//! Layout math (column widths, truncation) is done in Rust before the data
//! reaches a template.

pub const VIEW_TEMPLATE: &str = r#"{{ heading | style("header") }}
{% for tag in tags %}{{ tag.text | style(tag.style) }}{% if not loop.last %} {% endif %}{% endfor %}
{% if search %}{{ "search:" | style("muted") }} {{ search }}
{% endif %}{% if empty %}{{ empty_message | style("muted") }}
{% endif %}{% for row in rows %}{{ row.marker | style(row.style) }} {{ row.title | style(row.style) }}{{ row.padding }} {{ row.meta | style("muted") }}
{% endfor %}{% if card %}
{{ card.kind | style("card-kind") }} {{ card.title | style("title") }}
{% if card.period %}{{ card.period | style("time") }}
{% endif %}{% if card.description %}{{ card.description }}
{% endif %}{% for line in card.highlights %}  - {{ line }}
{% endfor %}{% if card.link %}{{ card.link | style("link") }}
{% endif %}{% endif %}"#;

pub const SESSION_TEMPLATE: &str = r#"{% for step in steps %}{% if not loop.first %}
{% endif %}{{ step.label | style("step") }}
{{ step.body }}{% endfor %}"#;

pub const TAGS_TEMPLATE: &str = r#"{% for tag in tags %}{{ tag | style("tag") }}
{% endfor %}"#;

pub const SKILLS_TEMPLATE: &str = r#"{% for skill in skills %}{% if not loop.first %}
{% endif %}{{ skill.heading | style("title") }} {{ ("(" ~ skill.key ~ ")") | style("muted") }}
{{ skill.summary }}
{% for line in skill.highlights %}  - {{ line }}
{% endfor %}{% endfor %}"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for entry in entries %}{{ entry.key | style("config-key") }} = {{ entry.value }}
{% endfor %}"#;
