pub mod department;
pub mod department_input;
pub mod employee;
pub mod employee_input;
pub mod leave;
pub mod leave_input;
pub mod patch;
pub mod qualification;
pub mod response;
pub mod role;
pub mod role_input;
pub mod salary;
pub mod shift;
pub mod shift_input;

pub use department::{Department, DepartmentSummary};
pub use department_input::{
    CreateDepartmentInput, DepartmentCreatedResponse, DepartmentEmployeesQuery,
    UpdateDepartmentInput, VerifyPasswordInput, VerifyPasswordResponse,
};
pub use employee::{ActiveEmployee, DepartmentEmployee, Employee, EmployeeProfile};
pub use employee_input::{
    ArchiveEmployeeInput, AssignRolesInput, AssignShiftInput, CreateEmployeeInput,
    EmployeeCreatedResponse, ShiftSelection, UpdateEmployeeInput,
};
pub use leave::LeaveRecord;
pub use leave_input::{LeaveCreatedResponse, LeaveInput, ValidLeave};
pub use qualification::{
    Qualification, QualificationCreatedResponse, QualificationInput, UpdateQualificationInput,
};
pub use response::{MessageResponse, OptionalRecord};
pub use role::Role;
pub use role_input::{CreateRoleInput, RoleCreatedResponse, UpdateRoleInput};
pub use salary::{Salary, SalaryCreatedResponse, SalaryInput};
pub use shift::Shift;
pub use shift_input::{CreateShiftInput, ShiftCreatedResponse, UpdateShiftInput};
