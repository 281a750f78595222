//! Seed data for running without a backend.
//!
//! The same fixture set the mobile mock build ships with: three people and
//! five conversations. Installed by [`crate::state::AppState::seed`] and
//! used throughout the test suite.

use crate::types::{ActionItem, Conversation, Person};

fn person(
    id: &str,
    name: &str,
    role: &str,
    avatar_color: &str,
    last_met: &str,
    met_count: u32,
    interests: &[&str],
    context: &str,
    open_follow_ups: &[&str],
) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar_color: avatar_color.to_string(),
        last_met: Some(last_met.to_string()),
        met_count,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        context: context.to_string(),
        open_follow_ups: open_follow_ups.iter().map(|s| s.to_string()).collect(),
    }
}

fn item(id: &str, text: &str, completed: bool) -> ActionItem {
    ActionItem {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

pub fn seed_people() -> Vec<Person> {
    vec![
        person(
            "p1",
            "Sarah Chen",
            "Product Lead at Orio",
            "bg-indigo-200",
            "Jan 16",
            5,
            &["Ethical AI", "Hiking", "Ceramics"],
            "Met at the Design Systems conference last year. Looking for a co-founder.",
            &[
                "Send the deck regarding the Q3 proposal",
                "Intro her to Marcus",
            ],
        ),
        person(
            "p2",
            "David Miller",
            "Freelance Architect",
            "bg-emerald-200",
            "Jan 14",
            12,
            &["Sustainable materials", "Jazz", "Coffee brewing"],
            "Old college friend. Currently renovating a loft in Brooklyn.",
            &[],
        ),
        person(
            "p3",
            "Elena Rostova",
            "Investor",
            "bg-orange-200",
            "Jan 12",
            1,
            &["Fintech", "Early stage B2B"],
            "Briefly introduced by Sarah. Interested in the memory space.",
            &["Schedule a proper 30-min coffee chat"],
        ),
    ]
}

pub fn seed_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "c1".to_string(),
            person_id: "p1".to_string(),
            participants: vec!["p1".to_string(), "p3".to_string()],
            title: "Q3 Beta Roadmap Review".to_string(),
            date: "Jan 16 • 2:30 PM".to_string(),
            location: "Blue Bottle Coffee".to_string(),
            summary: "Discussed the roadmap for the Q3 beta launch. Sarah is concerned \
                      about the onboarding flow but loves the new visual direction."
                .to_string(),
            key_points: vec![
                "Sarah thinks the sign-up process has too many steps.".to_string(),
                "Suggests moving the \"Personalization\" screen to after account creation."
                    .to_string(),
                "She is available next Tuesday for a design review.".to_string(),
            ],
            action_items: vec![
                item("a1", "Mock up a shortened onboarding flow", false),
                item("a2", "Send calendar invite for Tuesday Design Review", false),
            ],
            full_transcript: Some(
                "Sarah: Thanks for meeting up. I've been looking over the Q3 mocks.\n\n\
                 Me: Of course. What are your initial thoughts?\n\n\
                 Sarah: Visuals are stunning, but I really think we're losing people at \
                 step 3. It feels heavy. We should look at how Linear does their \
                 onboarding—it's much punchier.\n\n\
                 Elena: I agree with Sarah on the friction. If we're targeting the \
                 prosumer market, every extra click is a drop-off point.\n\n\
                 Me: That makes sense. We could move the 'Personalization' screen to \
                 after the main dashboard setup.\n\n\
                 Sarah: Exactly. Let's aim for a Tuesday design review to finalize that \
                 change."
                    .to_string(),
            ),
        },
        Conversation {
            id: "c2".to_string(),
            person_id: "p2".to_string(),
            participants: vec!["p2".to_string()],
            title: "Brooklyn Project & Japan Trip".to_string(),
            date: "Jan 14 • 6:00 PM".to_string(),
            location: "The Jazz Corner".to_string(),
            summary: "Casual catch-up. David is finishing the Brooklyn project next month. \
                      Talked about his upcoming trip to Japan."
                .to_string(),
            key_points: vec![
                "Brooklyn project wraps in Feb.".to_string(),
                "He needs recommendation for hotels in Kyoto.".to_string(),
                "Mentioned he is taking a break from contracting for 2 months.".to_string(),
            ],
            action_items: vec![item("a3", "Send list of Kyoto recommendations", false)],
            full_transcript: Some(
                "David: It's been a marathon, man. I'm taking two months off starting \
                 March.\n\n\
                 Me: Well deserved. You still heading to Japan?\n\n\
                 David: Yeah, Kyoto for ten days. I haven't booked a place yet though.\n\n\
                 Me: I have a list of spots from my last trip. I'll send them over."
                    .to_string(),
            ),
        },
        Conversation {
            id: "c3".to_string(),
            person_id: "p3".to_string(),
            participants: vec!["p3".to_string()],
            title: "Intro to Invisible AI".to_string(),
            date: "Jan 12 • 10:00 AM".to_string(),
            location: "TechCrunch Disrupt".to_string(),
            summary: "Introductory chat. Elena is looking for AI native apps in the \
                      productivity space."
                .to_string(),
            key_points: vec![
                "Elena invests in Pre-seed/Seed.".to_string(),
                "Thesis is around \"invisible AI\" interfaces.".to_string(),
            ],
            action_items: vec![],
            full_transcript: Some(
                "Elena: I see so many chat bots. I'm looking for things that disappear. \
                 AI shouldn't feel like a second person you have to manage; it should \
                 feel like an extension of your own capability."
                    .to_string(),
            ),
        },
        Conversation {
            id: "c4".to_string(),
            person_id: "p1".to_string(),
            participants: vec!["p1".to_string()],
            title: "Design System Migration Sync".to_string(),
            date: "Dec 10 • 11:00 AM".to_string(),
            location: "Virtual Call".to_string(),
            summary: "Initial sync regarding the design system migration. Agreed to use \
                      Figma variables."
                .to_string(),
            key_points: vec![
                "Migrating to variables in Q1.".to_string(),
                "Need to audit existing color tokens.".to_string(),
            ],
            action_items: vec![item("a4", "Run token audit", true)],
            full_transcript: Some(
                "Sarah: Variables are going to save us so much time. We need to start \
                 with the color tokens first though. It's a mess in the legacy file."
                    .to_string(),
            ),
        },
        Conversation {
            id: "c5".to_string(),
            person_id: "p1".to_string(),
            participants: vec!["p1".to_string()],
            title: "Coffee & Ceramics".to_string(),
            date: "Nov 24 • 4:00 PM".to_string(),
            location: "Design Conf Mixer".to_string(),
            summary: "First meeting. Connected over shared interest in ceramics and \
                      ethical AI."
                .to_string(),
            key_points: vec![
                "Sarah works at Orio.".to_string(),
                "She runs a pottery studio on weekends.".to_string(),
            ],
            action_items: vec![item("a5", "Connect on LinkedIn", true)],
            full_transcript: Some(
                "Sarah: Oh no way, I just bought a wheel last month! I'm trying to \
                 master centering. It's so much harder than it looks."
                    .to_string(),
            ),
        },
    ]
}
