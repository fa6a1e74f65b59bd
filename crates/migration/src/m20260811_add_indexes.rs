use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Partial unique index backing the single-active-semester invariant;
        // sea_query has no builder for partial indexes, so raw SQL
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_semesters_single_active
                 ON semesters (is_active) WHERE is_active",
            )
            .await?;

        // One enrollment per student, course, and semester
        manager
            .create_index(
                Index::create()
                    .name("idx_course_enrollments_student_course_semester")
                    .table(CourseEnrollments::Table)
                    .col(CourseEnrollments::StudentProfileId)
                    .col(CourseEnrollments::CourseId)
                    .col(CourseEnrollments::SemesterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on periods.semester_id for the per-semester listing
        manager
            .create_index(
                Index::create()
                    .name("idx_periods_semester_id")
                    .table(Periods::Table)
                    .col(Periods::SemesterId)
                    .to_owned(),
            )
            .await?;

        // Index on quiz_attempts.student_profile_id for attempt history
        manager
            .create_index(
                Index::create()
                    .name("idx_quiz_attempts_student_profile_id")
                    .table(QuizAttempts::Table)
                    .col(QuizAttempts::StudentProfileId)
                    .to_owned(),
            )
            .await?;

        // Index on learning_recommendations.student_profile_id
        manager
            .create_index(
                Index::create()
                    .name("idx_learning_recommendations_student_profile_id")
                    .table(LearningRecommendations::Table)
                    .col(LearningRecommendations::StudentProfileId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_semesters_single_active")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_enrollments_student_course_semester")
                    .table(CourseEnrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_periods_semester_id")
                    .table(Periods::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_quiz_attempts_student_profile_id")
                    .table(QuizAttempts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_learning_recommendations_student_profile_id")
                    .table(LearningRecommendations::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CourseEnrollments {
    Table,
    StudentProfileId,
    CourseId,
    SemesterId,
}

#[derive(DeriveIden)]
enum Periods {
    Table,
    SemesterId,
}

#[derive(DeriveIden)]
enum QuizAttempts {
    Table,
    StudentProfileId,
}

#[derive(DeriveIden)]
enum LearningRecommendations {
    Table,
    StudentProfileId,
}
