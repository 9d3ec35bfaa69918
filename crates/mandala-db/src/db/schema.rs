// Table definitions matching `migrations/`.

diesel::table! {
    content_item (id) {
        id -> Uuid,
        title -> Text,
        slug -> Text,
        description -> Text,
        content -> Text,
        image -> Text,
        category -> Text,
        features -> Array<Text>,
        price -> Float8,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    contact_message (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        phone -> Text,
        message -> Text,
        is_read -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    confirmation (id) {
        id -> Uuid,
        name -> Text,
        organization -> Text,
        position -> Text,
        email -> Text,
        phone -> Text,
        accepted_terms -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    gallery_item (id) {
        id -> Uuid,
        image -> Text,
        caption -> Text,
        category -> Text,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    admin (id) {
        id -> Uuid,
        email -> Text,
        password_hash -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
