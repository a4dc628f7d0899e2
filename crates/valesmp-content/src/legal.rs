//! Legal pages: the privacy policy and the terms of use.
//!
//! Same deal as the guide entries: bodies are written against
//! [`crate::markdown`] and compiled in.

/// One legal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDoc {
    /// URL-stable id, also the route segment.
    pub id: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Human-readable last-edit date shown under the title.
    pub last_updated: &'static str,
    /// Markdown-lite body.
    pub content: &'static str,
}

/// The privacy policy, served at `/privacy`.
pub const PRIVACY: LegalDoc = LegalDoc {
    id: "privacy",
    title: "Privacy Policy",
    last_updated: "August 24th, 2025",
    content: "\
## Overview
ValeSMP respects your privacy and is committed to protecting your personal data. This policy explains how we collect, use, and protect information when you use our website and Minecraft server.
We are a community-run Minecraft server, not a big corporation. We only collect what is necessary to run the server.

## Information We Collect
### Minecraft Server Data
- Your Minecraft username and UUID
- In-game statistics (blocks mined, distance traveled, etc.)
- Chat messages and commands, for moderation
- IP address, for connection and security purposes
- Build locations and land claims you create
### Website Data
- Basic analytics (page views, general location by country)
- Technical information (browser type, device type)
- Preferences stored in your browser
### Discord Data
- Discord username linked to Minecraft username, for whitelist applications
- Messages sent in our Discord server
- Support ticket contents

## How We Use Your Information
- To provide and maintain the Minecraft server
- To enforce server rules and prevent griefing
- To display player statistics and leaderboards
- To restore inventories or investigate issues
- To communicate important server updates

## Cookies and Storage
The website uses minimal cookies and local storage: your theme preference and basic functionality of interactive features. No tracking or advertising cookies are used.

## Data Sharing
We do not sell, trade, or rent your personal information. Information is shared only on public leaderboards (username and stats only), with Mojang/Microsoft for authentication, or when required by law.

## Data Retention
- Game statistics: kept indefinitely for historical records
- Chat logs: retained for 30 days for moderation
- IP addresses: retained for 90 days for security
- Backups: kept according to our backup rotation policy

## Your Rights
You can request a copy, correction, or deletion of your data (deletion may affect your ability to play), and opt out of public statistics display. Contact a member of staff on Discord or submit a support ticket.

## Children's Privacy
ValeSMP is strictly 16+. We do not knowingly collect personal information from anybody under 18 beyond what gameplay requires, and staff actively watch for doxxing and related safety issues.

## Security
Access to sensitive data is limited to the owner, backups are stored securely in multiple locations, and connections are encrypted wherever sensitive data moves between servers.

## Changes to This Policy
Significant changes are announced on our Discord server and reflected in the date above.

## Contact
Questions about this policy? Submit a ticket in `#support-tickets` on [Discord](https://discord.gg/ut7KJgANkY).",
};

/// The terms of use, served at `/terms`.
pub const TERMS: LegalDoc = LegalDoc {
    id: "terms",
    title: "Terms of Use",
    last_updated: "August 23rd, 2025",
    content: "\
## Welcome to ValeSMP!
By accessing this website or joining the server at `play.valesmp.com` you agree to these terms. If you do not agree with any part of them, please do not use our services.

## 1. Acceptance of Terms
- You must be at least 16 years old to use our services
- If you are under 18, you should have parental permission
- You are responsible for your account and all activity under it
- Alt accounts are treated as your own account

## 2. Server Rules
- Be respectful to all players and staff
- No griefing, stealing, or destroying others' builds
- No cheating, hacking, or exploiting
- No hate speech, discrimination, or harassment
- Keep content appropriate
- English only in public chat, for moderation
Full rules are in the [server guide](/guide).

## 3. Acceptable Use
You agree not to impersonate staff or other players, share personal information of others, access restricted areas or admin commands, disrupt the server, use it commercially without permission, or abuse bugs instead of reporting them.

## 4. User Content
You retain ownership of your builds. You grant us permission to include them in promotional content such as server tours, videos, or screenshots. We may remove inappropriate content without warning.

## 5. Donations and Ranks
- Donations are voluntary and help keep the server running
- Patron perks are cosmetic and quality-of-life only
- We maintain a strict non-pay-to-win environment
- Donations are non-refundable
- Breaking rules can mean loss of patron status without refund

## 6. Enforcement
Violations may result in warnings, temporary mutes or bans, permanent bans for severe or repeated violations, rollbacks, or loss of privileges. Staff decisions are final, but you may appeal through our Discord ticket system.

## 7. Disclaimers
The server is provided as is, without warranties. We are not responsible for data loss, downtime, or player disputes, though staff will help with serious issues.

## 8. Intellectual Property
Minecraft is owned by Mojang Studios/Microsoft; we are not affiliated with either. ValeSMP branding and custom content belongs to us.

## 9. Privacy
Please review our [Privacy Policy](/privacy) to understand how we collect and use information.

## 10. Changes to Terms
Significant changes are announced on our Discord server. Continued use after changes means you accept the new terms.

## 11. Governing Law
These terms are governed by the laws of the United Kingdom. Disputes are resolved through good faith discussion in our community first.

## 12. Contact
Questions? Submit a ticket in `#support-tickets` on [Discord](https://discord.gg/ut7KJgANkY).",
};

/// Look up a legal document by id.
pub fn doc(id: &str) -> Option<&'static LegalDoc> {
    match id {
        "privacy" => Some(&PRIVACY),
        "terms" => Some(&TERMS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_documents_resolve_by_id() {
        assert_eq!(doc("privacy").map(|d| d.title), Some("Privacy Policy"));
        assert_eq!(doc("terms").map(|d| d.title), Some("Terms of Use"));
        assert!(doc("cookies").is_none());
    }

    #[test]
    fn documents_render_without_raw_markup() {
        for legal in [&PRIVACY, &TERMS] {
            let html = crate::markdown::render(legal.content);
            assert!(!html.contains("## "), "{} leaks a heading", legal.id);
            assert!(!html.contains("**"), "{} leaks bold markers", legal.id);
            assert!(html.contains("<h2>"), "{} has no headings", legal.id);
            assert!(
                html.contains("<div class=\"bullet\">"),
                "{} has no bullets",
                legal.id
            );
        }
    }

    #[test]
    fn terms_link_to_the_privacy_policy_and_guide() {
        let html = crate::markdown::render(TERMS.content);
        assert!(html.contains(r#"<a href="/privacy""#));
        assert!(html.contains(r#"<a href="/guide""#));
    }
}
