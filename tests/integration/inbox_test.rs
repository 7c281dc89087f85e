//! Inbox workflow integration tests
//!
//! Exercises the conversation store, send operation, draft generator, and
//! view controller together over the seeded dataset.

mod common;

use backoffice_common::NotificationLevel;
use backoffice_messaging::{Channel, Message, Sender};

use common::{Script, ScriptedGenerator, TestApp};

mod unread_bookkeeping {
    use super::*;

    #[tokio::test]
    async fn customer_message_increments_unread_by_one() {
        let app = TestApp::new();
        let before = app
            .conversations
            .find("CONV002")
            .await
            .unwrap()
            .unwrap()
            .unread_count;

        let message = Message::new_from_customer(
            "CONV002",
            "C002",
            Channel::Whatsapp,
            None,
            "Still waiting on that address change.",
        )
        .unwrap();
        app.conversations.append_message(message).await.unwrap();

        let after = app
            .conversations
            .find("CONV002")
            .await
            .unwrap()
            .unwrap()
            .unread_count;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn admin_message_resets_unread_to_zero() {
        let app = TestApp::new();

        let reply = Message::new_admin_reply(
            "CONV003",
            "C003",
            Channel::Email,
            "A replacement is on its way.",
        )
        .unwrap();
        app.conversations.append_message(reply).await.unwrap();

        let conv = app.conversations.find("CONV003").await.unwrap().unwrap();
        assert_eq!(conv.unread_count, 0);
    }

    #[tokio::test]
    async fn other_conversations_are_untouched() {
        let app = TestApp::new();

        let reply =
            Message::new_admin_reply("CONV002", "C002", Channel::Whatsapp, "Done.").unwrap();
        app.conversations.append_message(reply).await.unwrap();

        let conv3 = app.conversations.find("CONV003").await.unwrap().unwrap();
        assert_eq!(conv3.unread_count, 1);
        assert_eq!(conv3.messages.len(), 1);
    }
}

mod append_semantics {
    use super::*;

    #[tokio::test]
    async fn last_message_cache_mirrors_the_append() {
        let app = TestApp::new();

        let reply = Message::new_admin_reply(
            "CONV002",
            "C002",
            Channel::Whatsapp,
            "Your address has been changed.",
        )
        .unwrap();
        let timestamp = reply.timestamp;
        app.conversations.append_message(reply).await.unwrap();

        let conv = app.conversations.find("CONV002").await.unwrap().unwrap();
        assert_eq!(conv.last_message, "Your address has been changed.");
        assert_eq!(conv.last_message_timestamp, timestamp);
    }

    #[tokio::test]
    async fn appends_are_append_only() {
        let app = TestApp::new();
        let before = app
            .conversations
            .find("CONV001")
            .await
            .unwrap()
            .unwrap()
            .messages;

        let reply =
            Message::new_admin_reply("CONV001", "C001", Channel::Email, "Glad to help!").unwrap();
        app.conversations.append_message(reply).await.unwrap();

        let after = app
            .conversations
            .find("CONV001")
            .await
            .unwrap()
            .unwrap()
            .messages;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[tokio::test]
    async fn two_sends_arrive_in_call_order() {
        let app = TestApp::new();

        let m1 = Message::new_admin_reply("CONV002", "C002", Channel::Whatsapp, "m1").unwrap();
        let m2 = Message::new_admin_reply("CONV002", "C002", Channel::Whatsapp, "m2").unwrap();
        app.conversations.append_message(m1).await.unwrap();
        app.conversations.append_message(m2).await.unwrap();

        let conv = app.conversations.find("CONV002").await.unwrap().unwrap();
        let tail: Vec<&str> = conv
            .messages
            .iter()
            .rev()
            .take(2)
            .rev()
            .map(|m| m.body.as_str())
            .collect();
        assert_eq!(tail, vec!["m1", "m2"]);
    }
}

mod send_workflow {
    use super::*;

    #[tokio::test]
    async fn reply_to_conv002_updates_every_derived_field() {
        let app = TestApp::new();
        let mut inbox = app.inbox();
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.set_reply_input("Address updated.");
        inbox.send_reply().await;

        let conv = app.conversations.find("CONV002").await.unwrap().unwrap();
        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.unread_count, 0);
        assert_eq!(conv.last_message, "Address updated.");

        let sent = conv.messages.last().unwrap();
        assert_eq!(sent.sender, Sender::Admin);
        assert_eq!(sent.channel, Channel::Whatsapp);
    }

    #[tokio::test]
    async fn whitespace_reply_is_rejected_without_any_mutation() {
        let app = TestApp::new();
        let genai = ScriptedGenerator::new(Script::Reply("unused".to_string()));
        let mut inbox = app.inbox_with(genai.clone());
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.set_reply_input("   \t\n ");
        inbox.send_reply().await;

        assert_eq!(genai.calls(), 0);
        let conv = app.conversations.find("CONV002").await.unwrap().unwrap();
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.unread_count, 1);
        assert_eq!(app.sink.count_at(NotificationLevel::Error), 1);
    }

    #[tokio::test]
    async fn send_refreshes_the_list_view() {
        let app = TestApp::new();
        let mut inbox = app.inbox();
        inbox.refresh().await;
        assert_eq!(inbox.total_unread(), 2);

        inbox.select("CONV003");
        inbox.set_reply_input("A replacement is on its way.");
        inbox.send_reply().await;

        // The controller's view was re-fetched, not patched locally
        assert_eq!(inbox.total_unread(), 1);
        let selected = inbox.selected().unwrap();
        assert_eq!(selected.id, "CONV003");
        assert_eq!(selected.last_message, "A replacement is on its way.");
    }
}

mod draft_workflow {
    use super::*;

    #[tokio::test]
    async fn admin_only_conversation_yields_info_and_no_call() {
        let opener =
            Message::new_admin_reply("CONV010", "C001", Channel::Email, "Welcome!").unwrap();
        let admin_only = backoffice_messaging::Conversation {
            id: "CONV010".to_string(),
            customer_id: "C001".to_string(),
            customer_name: "Alice Smith".to_string(),
            last_message: opener.body.clone(),
            last_message_timestamp: opener.timestamp,
            unread_count: 0,
            messages: vec![opener],
        };

        let app = TestApp::new();
        let genai = ScriptedGenerator::new(Script::Reply("unused".to_string()));
        let store = backoffice_messaging::ConversationStore::seeded(
            vec![admin_only],
            backoffice_common::Latency::none(),
        );
        let mut inbox = backoffice_messaging::InboxController::new(
            store,
            backoffice_messaging::DraftGenerator::new(genai.clone()),
            std::sync::Arc::new(app.sink.clone()),
        );
        inbox.refresh().await;

        inbox.generate_draft().await;

        assert_eq!(genai.calls(), 0);
        assert!(inbox.pending_draft().is_none());
        assert_eq!(app.sink.count_at(NotificationLevel::Info), 1);
        assert_eq!(app.sink.count_at(NotificationLevel::Error), 0);
    }

    #[tokio::test]
    async fn empty_collaborator_response_maps_to_fallback_draft() {
        let app = TestApp::new();
        let mut inbox = app.inbox_with(ScriptedGenerator::new(Script::Empty));
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.generate_draft().await;

        assert_eq!(
            inbox.pending_draft(),
            Some("Could not generate a draft at this time. Please try again or compose manually.")
        );
    }

    #[tokio::test]
    async fn collaborator_failure_yields_error_draft_and_notification() {
        let app = TestApp::new();
        let mut inbox = app.inbox_with(ScriptedGenerator::new(Script::Fail));
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.set_reply_input("my half-typed reply");
        inbox.generate_draft().await;

        assert_eq!(
            inbox.pending_draft(),
            Some("Failed to generate draft. Please try again.")
        );
        assert_eq!(app.sink.count_at(NotificationLevel::Error), 1);
        // The reply field is left untouched
        assert_eq!(inbox.reply_input(), "my half-typed reply");
    }

    #[tokio::test]
    async fn accepted_draft_is_sent_as_admin_not_ai() {
        let app = TestApp::new();
        let mut inbox = app.inbox_with(ScriptedGenerator::new(Script::Reply(
            "We have updated your shipping address.".to_string(),
        )));
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.generate_draft().await;
        inbox.accept_draft();
        assert_eq!(inbox.reply_input(), "We have updated your shipping address.");
        inbox.send_reply().await;

        let conv = app.conversations.find("CONV002").await.unwrap().unwrap();
        let sent = conv.messages.last().unwrap();
        assert_eq!(sent.sender, Sender::Admin);
        assert!(!app.conversations.contains_sender(Sender::Ai));
    }
}

mod selection {
    use super::*;

    #[tokio::test]
    async fn first_conversation_is_selected_by_default() {
        let app = TestApp::new();
        let mut inbox = app.inbox();
        inbox.refresh().await;

        assert_eq!(inbox.selected_id(), Some("CONV001"));
    }

    #[tokio::test]
    async fn switching_conversations_clears_draft_and_reply() {
        let app = TestApp::new();
        let mut inbox = app.inbox();
        inbox.refresh().await;

        inbox.select("CONV002");
        inbox.generate_draft().await;
        inbox.set_reply_input("typing something");
        assert!(inbox.pending_draft().is_some());

        inbox.select("CONV003");

        assert!(inbox.pending_draft().is_none());
        assert_eq!(inbox.reply_input(), "");
    }

    #[tokio::test]
    async fn selection_survives_refresh() {
        let app = TestApp::new();
        let mut inbox = app.inbox();
        inbox.refresh().await;

        inbox.select("CONV003");
        inbox.refresh().await;

        assert_eq!(inbox.selected_id(), Some("CONV003"));
    }
}
