//! Built-in NovaFlow page copy.
//!
//! Static reference data; [`crate::content::Content::builtin`] wraps it into
//! collections. Pages that need other copy supply a CMS document instead.

use crate::types::{FaqEntry, Feature, Step, Testimonial, UseCase};

fn feature(name: &str, description: &str, icon: &str, category: &str) -> Feature {
    Feature {
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        category: category.into(),
    }
}

fn step(title: &str, description: &str) -> Step {
    Step {
        title: title.into(),
        description: description.into(),
    }
}

fn use_case(title: &str, description: &str, category: &str) -> UseCase {
    UseCase {
        title: title.into(),
        description: description.into(),
        category: category.into(),
    }
}

fn testimonial(name: &str, role: &str, company: &str, quote: &str, initials: &str) -> Testimonial {
    Testimonial {
        name: name.into(),
        role: role.into(),
        company: company.into(),
        quote: quote.into(),
        avatar: format!("https://dummyimage.com/80x80/6c5ce7/ffffff&text={initials}"),
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.into(),
        answer: answer.into(),
    }
}

pub fn features() -> Vec<Feature> {
    vec![
        feature(
            "Adaptive Workflows",
            "AI routes tasks, approvals, and alerts based on context to keep teams aligned.",
            "⚡",
            "Automation",
        ),
        feature(
            "Code-Aware Actions",
            "Deploy, test, and roll back from a single command center with built-in guardrails.",
            "🛠️",
            "DevOps",
        ),
        feature(
            "Team Insights",
            "Live timelines and health scores for every workflow with proactive nudges.",
            "📊",
            "Visibility",
        ),
        feature(
            "Incident Playbooks",
            "Standardize on-call steps, alerts, and approvals with reusable runbooks.",
            "🛡️",
            "Reliability",
        ),
    ]
}

pub fn steps() -> Vec<Step> {
    vec![
        step(
            "Capture",
            "Connect repos, chat, and CI/CD in minutes with guided setup.",
        ),
        step(
            "Automate",
            "Drag-and-drop steps or let AI suggest the flow to reduce toil.",
        ),
        step(
            "Ship",
            "Run, monitor, and recover with built-in guardrails and alerts.",
        ),
    ]
}

pub fn use_cases() -> Vec<UseCase> {
    vec![
        use_case(
            "Developers",
            "Automate PR checks, preview deploys, and incident runbooks.",
            "Engineering",
        ),
        use_case(
            "Founders",
            "See pipeline health, unblock teams, and ship without chaos.",
            "Leadership",
        ),
        use_case(
            "Remote Teams",
            "Asynchronous handoffs with alerts where work happens.",
            "Collaboration",
        ),
        use_case(
            "Ops",
            "Standardize playbooks, enforce SLAs, and reduce toil.",
            "Operations",
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Priya Desai",
            "VP Engineering",
            "LaunchPad",
            "NovaFlow cut our release coordination time by 40% and incidents by 30%.",
            "PD",
        ),
        testimonial(
            "Aaron Smith",
            "CTO",
            "Northwind",
            "From PR checks to rollbacks, everything is automated and auditable.",
            "AS",
        ),
        testimonial(
            "Maya Lin",
            "Head of Ops",
            "SignalOps",
            "Runbooks are now living workflows with real-time ownership and alerts.",
            "ML",
        ),
    ]
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        faq(
            "How does NovaFlow integrate with our stack?",
            "Connect Git providers, CI/CD, chat, and issue trackers via secure OAuth and scoped tokens.",
        ),
        faq(
            "What’s the security model and data handling?",
            "SSO, audit logs, role-based access, and data encryption in transit and at rest.",
        ),
        faq(
            "Can non-technical teams build workflows?",
            "Yes, the canvas and templates are no-code; guardrails prevent unsafe changes.",
        ),
        faq(
            "Do you support on-call and incident playbooks?",
            "Prebuilt playbooks include ownership, escalations, and comms channels with SLAs.",
        ),
        faq(
            "How do seats and roles work?",
            "Assign roles per workspace; granular permissions for runs, templates, and settings.",
        ),
        faq(
            "Is there a free trial?",
            "Start free with core features; upgrade to Scale for SSO, audit logs, and priority support.",
        ),
    ]
}
