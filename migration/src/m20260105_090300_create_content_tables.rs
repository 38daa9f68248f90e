use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATE_PROGRAMS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.programs (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(255) NOT NULL,
        slug VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        duration VARCHAR(255) NOT NULL DEFAULT '',
        category incubator_platform.program_category NOT NULL,
        application_url TEXT,
        image_url TEXT,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_EVENTS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.events (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title VARCHAR(255) NOT NULL,
        event_type incubator_platform.event_type NOT NULL,
        date DATE NOT NULL,
        time TIME,
        location VARCHAR(255),
        online_url TEXT,
        banner_url TEXT,
        description TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_EVENT_REGISTRATIONS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.event_registrations (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        event_id UUID NOT NULL REFERENCES incubator_platform.events(id) ON DELETE CASCADE,
        user_id UUID NOT NULL REFERENCES incubator_platform.users(id) ON DELETE CASCADE,
        full_name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE(event_id, user_id)
    )
"#;

const CREATE_MENTORS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.mentors (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID UNIQUE REFERENCES incubator_platform.users(id) ON DELETE SET NULL,
        name VARCHAR(255) NOT NULL,
        role VARCHAR(255) NOT NULL DEFAULT '',
        expertise TEXT[] NOT NULL DEFAULT '{}',
        bio TEXT NOT NULL DEFAULT '',
        companies TEXT,
        linkedin_url TEXT,
        photo_url TEXT,
        is_active BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_STARTUPS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.startups (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        owner_id UUID UNIQUE REFERENCES incubator_platform.users(id) ON DELETE SET NULL,
        name VARCHAR(255) NOT NULL,
        slug VARCHAR(255) NOT NULL,
        sector VARCHAR(255) NOT NULL,
        stage VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        team_size INTEGER,
        traction TEXT,
        is_public BOOLEAN NOT NULL DEFAULT FALSE,
        is_featured BOOLEAN NOT NULL DEFAULT FALSE,
        status incubator_platform.startup_status NOT NULL DEFAULT 'active',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_HERO_BANNERS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.hero_banners (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title VARCHAR(255) NOT NULL,
        subtitle TEXT,
        cta_label VARCHAR(255),
        cta_href TEXT,
        image_url TEXT,
        sort_order INTEGER NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_MEDIA_ASSETS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS incubator_platform.media_assets (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        file_name VARCHAR(255) NOT NULL,
        url TEXT NOT NULL,
        content_type VARCHAR(255) NOT NULL,
        size_bytes BIGINT,
        alt_text TEXT,
        uploaded_by UUID REFERENCES incubator_platform.users(id) ON DELETE SET NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

// Public pages filter and sort on these columns
const CREATE_INDEXES_SQL: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS programs_slug_unique
     ON incubator_platform.programs(slug)",
    "CREATE UNIQUE INDEX IF NOT EXISTS startups_slug_unique
     ON incubator_platform.startups(slug)",
    "CREATE INDEX IF NOT EXISTS idx_events_date
     ON incubator_platform.events(date)",
    "CREATE INDEX IF NOT EXISTS idx_event_registrations_user
     ON incubator_platform.event_registrations(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_startups_public_featured
     ON incubator_platform.startups(is_public, is_featured)",
    "CREATE INDEX IF NOT EXISTS idx_hero_banners_active_sort
     ON incubator_platform.hero_banners(is_active, sort_order)",
];

const TABLES: &[&str] = &[
    "media_assets",
    "hero_banners",
    "startups",
    "mentors",
    "event_registrations",
    "events",
    "programs",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for sql in [
            CREATE_PROGRAMS_SQL,
            CREATE_EVENTS_SQL,
            CREATE_EVENT_REGISTRATIONS_SQL,
            CREATE_MENTORS_SQL,
            CREATE_STARTUPS_SQL,
            CREATE_HERO_BANNERS_SQL,
            CREATE_MEDIA_ASSETS_SQL,
        ] {
            manager.get_connection().execute_unprepared(sql).await?;
        }

        for sql in CREATE_INDEXES_SQL {
            manager.get_connection().execute_unprepared(sql).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes go with their tables
        for table in TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "DROP TABLE IF EXISTS incubator_platform.{table}"
                ))
                .await?;
        }

        Ok(())
    }
}
