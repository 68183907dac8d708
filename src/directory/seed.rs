//! Built-in organizations and chat histories.

use chrono::{DateTime, Duration, Utc};

use super::model::{ChatHistory, Message, MessageStatus, Organization, Sender};

fn organization(id: &str, name: &str, category: &str, description: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        logo: None,
        verified: true,
    }
}

pub(super) fn organizations() -> Vec<Organization> {
    vec![
        organization(
            "1",
            "City Medical Center",
            "hospital",
            "Leading healthcare provider offering comprehensive medical services, emergency care, and specialized treatments.",
        ),
        organization(
            "2",
            "Metropolitan Bank",
            "bank",
            "Full-service banking institution providing personal banking, loans, mortgages, and wealth management.",
        ),
        organization(
            "3",
            "Grand Plaza Hotel",
            "hotel",
            "Luxury accommodation with premium amenities, conference facilities, and exceptional hospitality services.",
        ),
        organization(
            "4",
            "SafeGuard Insurance",
            "insurance",
            "Comprehensive insurance solutions including auto, home, life, and business coverage.",
        ),
        organization(
            "5",
            "Department of Motor Vehicles",
            "government",
            "Official government agency for vehicle registration, driver licensing, and motor vehicle services.",
        ),
        organization(
            "6",
            "Discover Tourism Bureau",
            "tourism",
            "Your gateway to exploring local attractions, planning trips, and discovering hidden gems.",
        ),
        organization(
            "7",
            "TechStart Solutions",
            "small business",
            "Innovative technology startup specializing in digital transformation and business automation.",
        ),
        organization(
            "8",
            "GreenLeaf Consulting",
            "small business",
            "Environmental consulting firm helping businesses implement sustainable practices.",
        ),
    ]
}

/// Seed message script: (id, sender, minutes before seeding, content).
type Script<'a> = [(u32, Sender, i64, &'a str)];

fn messages(now: DateTime<Utc>, script: &Script<'_>) -> Vec<Message> {
    script
        .iter()
        .map(|&(n, sender, minutes_ago, content)| Message {
            id: format!("msg-{n}"),
            content: content.to_string(),
            sender,
            timestamp: now - Duration::minutes(minutes_ago),
            status: (sender == Sender::User).then_some(MessageStatus::Read),
        })
        .collect()
}

fn history(
    id: &str,
    org: &Organization,
    now: DateTime<Utc>,
    minutes_ago: i64,
    unread: u32,
    messages: Vec<Message>,
) -> ChatHistory {
    let last_message = messages
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default();

    ChatHistory {
        id: id.to_string(),
        organization_id: org.id.clone(),
        organization_name: org.name.clone(),
        organization_logo: org.logo.clone(),
        last_message,
        timestamp: now - Duration::minutes(minutes_ago),
        unread_count: Some(unread),
        messages,
    }
}

pub(super) fn chat_histories(orgs: &[Organization], now: DateTime<Utc>) -> Vec<ChatHistory> {
    use Sender::{Agent, User};

    let medical = messages(
        now,
        &[
            (1, User, 60, "Hello, I would like to schedule an appointment with Dr. Smith."),
            (2, Agent, 55, "Hi! I'd be happy to help you schedule an appointment with Dr. Smith. What type of appointment are you looking for?"),
            (3, User, 50, "I need a general consultation for a regular checkup."),
            (4, Agent, 45, "Perfect! I have availability tomorrow at 2:00 PM or Thursday at 10:30 AM. Which works better for you?"),
            (5, User, 40, "Tomorrow at 2:00 PM works great for me."),
            (6, Agent, 30, "Your appointment is confirmed for tomorrow at 2:00 PM. Please arrive 15 minutes early."),
        ],
    );

    let bank = messages(
        now,
        &[
            (7, User, 180, "Hi, I'm interested in opening a savings account. What are your current interest rates?"),
            (8, Agent, 150, "Hello! Thank you for your interest in our savings accounts. Our current rate for standard savings is 2.5% APY, and our high-yield savings offers 4.2% APY with a minimum balance of $1,000."),
            (9, User, 132, "That sounds great! What documents do I need to open the high-yield account?"),
            (10, Agent, 126, "You'll need a valid government-issued ID, proof of address (utility bill or lease), and your Social Security number. The initial deposit can be made online or in-branch."),
            (11, User, 123, "Perfect, I have all those documents. Can I start the application online?"),
            (12, Agent, 120, "Absolutely! I can send you a secure link to begin the application process. It typically takes 5-10 minutes to complete."),
        ],
    );

    let hotel = messages(
        now,
        &[
            (13, User, 1500, "Hello, I have a reservation for next weekend but would like to upgrade my room if possible."),
            (14, Agent, 1470, "Good evening! I'd be delighted to help you with your room upgrade. May I have your reservation confirmation number?"),
            (15, User, 1458, "Yes, it's GPH-2024-0156."),
            (16, Agent, 1446, "Thank you! I see your reservation for a standard king room. We have deluxe suites available with city views. The upgrade would be $75 per night. Would you like to proceed?"),
            (17, User, 1443, "That sounds perfect! Yes, please upgrade me to the deluxe suite."),
            (18, Agent, 1440, "Your reservation has been updated. You now have a deluxe suite for 3 nights."),
        ],
    );

    // Histories reference the first three organizations.
    let mut out = Vec::with_capacity(3);
    for (org, (id, minutes_ago, unread, msgs)) in orgs.iter().zip([
        ("chat-1", 30, 0, medical),
        ("chat-2", 120, 1, bank),
        ("chat-3", 1440, 0, hotel),
    ]) {
        out.push(history(id, org, now, minutes_ago, unread, msgs));
    }
    out
}
